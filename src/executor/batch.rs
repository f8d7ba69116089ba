use crate::executor::CommandExecutor;
use crate::report::{Outcome, RunReport};
use crate::strategy::{Strategy, StrategyKind};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// 실행 계획: 순차 실행할 전략들 + 마지막에 실행할 블로킹 전략 (선택)
#[derive(Default)]
pub struct StrategyPlan {
    finite: Vec<Box<dyn Strategy>>,
    terminal: Option<Box<dyn Strategy>>,
}

impl StrategyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// 전략 추가. 블로킹 전략은 순서와 무관하게 마지막 자리에 놓인다.
    pub fn push(&mut self, strategy: Box<dyn Strategy>) {
        match strategy.kind() {
            StrategyKind::Finite => self.finite.push(strategy),
            StrategyKind::Blocking => {
                if let Some(previous) = self.terminal.replace(strategy) {
                    warn!(strategy = previous.name(), "replacing terminal strategy");
                }
            }
        }
    }

    pub fn with(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.push(strategy);
        self
    }

    pub fn extend(mut self, strategies: Vec<Box<dyn Strategy>>) -> Self {
        for strategy in strategies {
            self.push(strategy);
        }
        self
    }

    pub fn finite(&self) -> &[Box<dyn Strategy>] {
        &self.finite
    }

    pub fn terminal(&self) -> Option<&dyn Strategy> {
        self.terminal.as_deref()
    }

    pub fn strategy_count(&self) -> usize {
        self.finite.len() + usize::from(self.terminal.is_some())
    }
}

/// 전략 실행기
///
/// 각 전략을 정확히 한 번, 순서대로 실행한다. 한 전략의 실패는 결과로
/// 기록될 뿐 다음 전략의 실행을 막지 않는다.
pub struct StrategyRunner {
    executor: Arc<dyn CommandExecutor>,
}

impl StrategyRunner {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// 순차 전략 실행 후 리포트 반환 (블로킹 전략은 실행하지 않음)
    pub async fn run(&self, plan: &StrategyPlan) -> RunReport {
        let mut report = RunReport::new();

        for strategy in plan.finite() {
            report.push(self.run_one(strategy.as_ref()).await);
        }

        info!(
            total = report.len(),
            failed = report.outcomes().iter().filter(|o| !o.is_success()).count(),
            "strategy sequence finished"
        );

        report
    }

    /// 블로킹 전략 실행. 성공하는 동안은 반환하지 않는다.
    pub async fn run_terminal(&self, plan: &StrategyPlan) -> Option<Outcome> {
        match plan.terminal() {
            Some(strategy) => Some(self.run_one(strategy).await),
            None => None,
        }
    }

    /// 단일 전략 실행
    pub async fn run_one(&self, strategy: &dyn Strategy) -> Outcome {
        let start_time = Instant::now();

        let steps = strategy.invoke(self.executor.as_ref()).await;
        let status = strategy.classify(&steps);
        let diagnostic = strategy.summarize(&steps);

        info!(strategy = strategy.name(), status = status.as_str(), "strategy finished");

        Outcome {
            name: strategy.name().to_string(),
            status,
            diagnostic,
            steps,
            duration_ms: start_time.elapsed().as_millis(),
        }
    }
}
