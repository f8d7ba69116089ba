use crate::executor::{CommandExecutor, Invocation};
use crate::report::StepResult;
use crate::strategy::{run_step, Strategy, StrategyKind, SuccessCriterion};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// 1픽셀 이동 후 되돌리기 전의 짧은 대기
const NUDGE_PAUSE: Duration = Duration::from_millis(100);

/// Nudges the pointer one pixel right and back, then idles, forever.
///
/// Returns only when `xdotool` is missing or fails, or after `max_cycles`
/// cycles when a bound is set.
#[derive(Debug, Clone)]
pub struct MouseJitter {
    interval: Duration,
    max_cycles: Option<u64>,
}

impl MouseJitter {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_cycles: None,
        }
    }

    #[cfg(test)]
    pub fn with_max_cycles(mut self, cycles: u64) -> Self {
        self.max_cycles = Some(cycles);
        self
    }

    fn nudge() -> Invocation {
        Invocation::new("xdotool", &["mousemove_relative", "1", "0"])
    }

    fn restore() -> Invocation {
        // "--" 없이는 -1 이 옵션으로 해석된다
        Invocation::new("xdotool", &["mousemove_relative", "--", "-1", "0"])
    }
}

impl Default for MouseJitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[async_trait]
impl Strategy for MouseJitter {
    fn name(&self) -> &str {
        "Mouse jitter"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Blocking
    }

    async fn invoke(&self, executor: &dyn CommandExecutor) -> Vec<StepResult> {
        let criterion = SuccessCriterion::ExitStatus;
        let mut cycles: u64 = 0;

        loop {
            if self.max_cycles.is_some_and(|max| cycles >= max) {
                return vec![StepResult::succeeded(Self::nudge().command_line())
                    .with_message(format!("{} cycles completed", cycles))];
            }

            let step = run_step(executor, &Self::nudge(), &criterion).await;
            if !step.is_success() {
                return vec![step];
            }
            tokio::time::sleep(NUDGE_PAUSE).await;

            let step = run_step(executor, &Self::restore(), &criterion).await;
            if !step.is_success() {
                return vec![step];
            }

            cycles += 1;
            debug!(cycles, "pointer nudged");
            tokio::time::sleep(self.interval).await;
        }
    }
}
