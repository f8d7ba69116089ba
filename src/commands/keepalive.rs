use crate::cli::RunOptions;
use crate::error::Result;
use crate::executor::{CommandExecutor, ProcessInspector, StrategyPlan, StrategyRunner};
use crate::report::RunReport;
use crate::strategy::{default_strategies, MouseJitter};
use crate::ui;
use colored::*;
use std::sync::Arc;
use tracing::warn;

/// 옵션에 맞는 실행 계획 생성
pub fn build_plan(options: &RunOptions) -> StrategyPlan {
    let mut plan = StrategyPlan::new().extend(default_strategies(options.disable_services));
    if let Some(interval) = options.jitter {
        plan.push(Box::new(MouseJitter::new(interval)));
    }
    plan
}

/// 순차 전략을 모두 실행하고 프로세스 요약을 붙인 리포트 생성
pub async fn collect_report(
    executor: Arc<dyn CommandExecutor>,
    plan: &StrategyPlan,
) -> RunReport {
    let runner = StrategyRunner::new(Arc::clone(&executor));
    let mut report = runner.run(plan).await;

    match ProcessInspector::inspect(executor.as_ref()).await {
        Ok(summary) => report.set_processes(summary),
        Err(e) => warn!(error = %e, "process listing unavailable"),
    }

    report
}

/// Keep-alive 실행: 전략 실행 → 리포트 출력 → (선택) 마우스 jitter
pub async fn execute_keepalive(
    options: &RunOptions,
    executor: Arc<dyn CommandExecutor>,
) -> Result<()> {
    let plan = build_plan(options);

    if !options.json {
        println!("{} Screen keep-alive starting...", "[>>]".cyan().bold());
        println!("{}", "=".repeat(50));
    }

    let spinner = if options.json {
        ui::hidden_spinner()
    } else {
        ui::create_spinner(&format!("Applying {} strategies...", plan.finite().len()))
    };
    let report = collect_report(Arc::clone(&executor), &plan).await;

    // JSON 모드: 한 줄에 JSON 문서 하나 (리포트, 이후 블로킹 전략 결과)
    if options.json {
        spinner.finish_and_clear();
        println!("{}", ui::render_json(&report)?);
    } else {
        ui::finish_spinner(&spinner, &format!("{} strategies applied", report.len()));
        println!("{}", ui::render_text(&report));
        println!("{}", "=".repeat(50));
        println!("\n{} Additional manual steps you can take:", "[i]".cyan());
        for step in ui::MANUAL_STEPS {
            println!("  - {}", step);
        }
    }

    let runner = StrategyRunner::new(executor);
    if let Some(terminal) = plan.terminal() {
        let notice = format!(
            "{} {} running (every {}s). Press Ctrl-C to stop.",
            "[*]".cyan().bold(),
            terminal.name(),
            options.jitter.map(|d| d.as_secs()).unwrap_or_default()
        );
        if options.json {
            eprintln!("{}", notice);
        } else {
            println!("\n{}", notice);
        }
    }

    // 블로킹 전략은 실패했을 때만 여기로 돌아온다
    if let Some(outcome) = runner.run_terminal(&plan).await {
        if options.json {
            println!("{}", ui::render_outcome_json(&outcome)?);
        } else {
            println!("{}", ui::render_outcome(&outcome));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::scripted::ScriptedExecutor;
    use crate::report::OutcomeStatus;
    use std::time::Duration;

    fn options(jitter: Option<Duration>) -> RunOptions {
        RunOptions {
            jitter,
            disable_services: false,
            json: true,
        }
    }

    #[test]
    fn test_plan_without_jitter() {
        let plan = build_plan(&options(None));
        assert_eq!(plan.finite().len(), 4);
        assert!(plan.terminal().is_none());
    }

    #[test]
    fn test_plan_with_jitter() {
        let plan = build_plan(&options(Some(Duration::from_secs(10))));
        assert_eq!(plan.strategy_count(), 5);
        assert_eq!(plan.terminal().map(|s| s.name()), Some("Mouse jitter"));
    }

    #[tokio::test]
    async fn test_nothing_installed() {
        let executor: Arc<dyn CommandExecutor> = Arc::new(ScriptedExecutor::new());

        let report = collect_report(executor, &build_plan(&options(None))).await;

        assert_eq!(report.len(), 4);
        assert!(report.statuses().iter().all(|s| *s == OutcomeStatus::Unavailable));
        assert!(report.processes().is_none());
    }

    #[tokio::test]
    async fn test_full_sequence() {
        let executor = Arc::new(
            ScriptedExecutor::new()
                .ok("xset -dpms", "")
                .ok("xset s off", "")
                .ok("xset s noblank", "")
                .ok("xset q", "  DPMS is Disabled\n")
                .fail("setterm -blank 0", 1, "setterm: $TERM is not defined.")
                .missing("caffeine -a")
                .reply("systemctl is-enabled display-manager.service", 0, "enabled\n", "")
                .reply("systemctl is-enabled gdm.service", 1, "disabled\n", "")
                .reply("systemctl is-enabled sddm.service", 4, "not-found\n", "")
                .ok("ps aux", "root 1 xset q\n"),
        );

        let report = collect_report(executor.clone(), &build_plan(&options(None))).await;

        assert_eq!(
            report.statuses(),
            vec![
                OutcomeStatus::Succeeded,
                OutcomeStatus::Failed,
                OutcomeStatus::Unavailable,
                OutcomeStatus::Succeeded,
            ]
        );
        assert_eq!(report.processes().unwrap().running(), vec!["xset"]);
        assert_eq!(executor.calls().last().map(String::as_str), Some("ps aux"));
    }

    #[tokio::test]
    async fn test_execute_returns_when_jitter_unavailable() {
        let executor: Arc<dyn CommandExecutor> = Arc::new(ScriptedExecutor::new());

        let result = execute_keepalive(&options(Some(Duration::from_secs(1))), executor).await;

        assert!(result.is_ok());
    }
}
