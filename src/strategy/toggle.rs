use crate::executor::{CommandExecutor, Invocation};
use crate::report::StepResult;
use crate::strategy::{run_step, Strategy, SuccessCriterion};
use async_trait::async_trait;

/// 명령어가 실패했을 때 나머지 명령어를 계속할지 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    Continue,
    Stop,
}

/// 고정된 명령어들을 순서대로 실행하는 전략 (설정 토글류)
#[derive(Debug, Clone)]
pub struct CommandSequence {
    name: String,
    steps: Vec<(Invocation, SuccessCriterion)>,
    on_failure: OnFailure,
}

impl CommandSequence {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
            on_failure: OnFailure::Continue,
        }
    }

    pub fn step(self, program: &str, args: &[&str]) -> Self {
        self.step_with(Invocation::new(program, args), SuccessCriterion::ExitStatus)
    }

    pub fn step_with(mut self, invocation: Invocation, criterion: SuccessCriterion) -> Self {
        self.steps.push((invocation, criterion));
        self
    }

    pub fn on_failure(mut self, on_failure: OnFailure) -> Self {
        self.on_failure = on_failure;
        self
    }
}

#[async_trait]
impl Strategy for CommandSequence {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, executor: &dyn CommandExecutor) -> Vec<StepResult> {
        let mut results = Vec::with_capacity(self.steps.len());

        for (invocation, criterion) in &self.steps {
            let result = run_step(executor, invocation, criterion).await;
            let stop = !result.is_success() && self.on_failure == OnFailure::Stop;
            results.push(result);
            if stop {
                break;
            }
        }

        results
    }
}

/// DPMS 와 X 스크린세이버 끄기. 세 명령어는 서로 독립적으로 시도한다.
pub fn disable_dpms() -> CommandSequence {
    CommandSequence::new("Disable DPMS and screensaver")
        .step("xset", &["-dpms"])
        .step("xset", &["s", "off"])
        .step("xset", &["s", "noblank"])
        .step_with(
            Invocation::new("xset", &["q"]),
            SuccessCriterion::OutputContains("DPMS is Disabled".to_string()),
        )
}

/// Linux 콘솔 blank/powerdown 끄기
pub fn configure_console() -> CommandSequence {
    CommandSequence::new("Configure console blanking")
        .step("setterm", &["-blank", "0"])
        .step("setterm", &["-powerdown", "0"])
        .on_failure(OnFailure::Stop)
}

pub fn caffeine() -> CommandSequence {
    CommandSequence::new("Caffeine helper").step("caffeine", &["-a"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::scripted::ScriptedExecutor;
    use crate::report::OutcomeStatus;

    #[tokio::test]
    async fn test_continue_attempts_every_step() {
        let executor = ScriptedExecutor::new()
            .fail("xset -dpms", 1, "server does not have extension for -dpms option")
            .ok("xset s off", "")
            .ok("xset s noblank", "")
            .ok("xset q", "DPMS (Energy Star):\n  DPMS is Disabled\n");

        let strategy = disable_dpms();
        let steps = strategy.invoke(&executor).await;

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].status, OutcomeStatus::Failed);
        assert!(steps[1..].iter().all(|s| s.is_success()));
        assert_eq!(strategy.classify(&steps), OutcomeStatus::Failed);
        assert!(strategy.summarize(&steps).unwrap().contains("xset -dpms exited with status 1"));
    }

    #[tokio::test]
    async fn test_stop_on_first_failure() {
        let executor = ScriptedExecutor::new().fail(
            "setterm -blank 0",
            1,
            "setterm: terminal xterm-256color does not support --blank",
        );

        let strategy = configure_console();
        let steps = strategy.invoke(&executor).await;

        assert_eq!(steps.len(), 1);
        assert_eq!(executor.calls(), vec!["setterm -blank 0"]);
        assert_eq!(strategy.classify(&steps), OutcomeStatus::Failed);
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let executor = ScriptedExecutor::new().missing("caffeine -a");

        let strategy = caffeine();
        let steps = strategy.invoke(&executor).await;

        assert_eq!(strategy.classify(&steps), OutcomeStatus::Unavailable);
        assert_eq!(strategy.summarize(&steps).as_deref(), Some("caffeine is not installed"));
    }

    #[tokio::test]
    async fn test_console_runs_both_settings() {
        let executor = ScriptedExecutor::new()
            .ok("setterm -blank 0", "")
            .ok("setterm -powerdown 0", "");

        let strategy = configure_console();
        let steps = strategy.invoke(&executor).await;

        assert_eq!(executor.calls(), vec!["setterm -blank 0", "setterm -powerdown 0"]);
        assert_eq!(strategy.classify(&steps), OutcomeStatus::Succeeded);
    }
}
