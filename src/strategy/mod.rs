pub mod toggle;
pub mod services;
pub mod jitter;

use crate::error::{KeepAliveError, Result};
use crate::executor::{CommandExecutor, CommandOutput, Invocation};
use crate::report::{OutcomeStatus, StepResult};
use async_trait::async_trait;

pub use jitter::MouseJitter;
pub use services::ServiceInspection;
pub use toggle::{CommandSequence, OnFailure};

/// 전략 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// 실행 후 결과를 돌려준다
    Finite,
    /// 성공하는 동안 반환하지 않는다 (항상 마지막에 실행)
    Blocking,
}

/// 명령어 성공 판정 기준
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessCriterion {
    /// 종료 코드 0
    ExitStatus,
    /// stdout 에 주어진 문자열이 포함됨 (종료 코드 무관)
    OutputContains(String),
}

impl SuccessCriterion {
    /// 출력 결과를 기준에 따라 분류
    pub fn check(&self, invocation: &Invocation, output: &CommandOutput) -> Result<()> {
        match self {
            SuccessCriterion::ExitStatus => {
                if output.success() {
                    Ok(())
                } else {
                    Err(failure(invocation, output))
                }
            }
            SuccessCriterion::OutputContains(needle) => {
                if output.stdout.contains(needle.as_str()) {
                    Ok(())
                } else {
                    Err(KeepAliveError::CommandFailed {
                        command: invocation.command_line(),
                        code: output.code,
                        stderr: format!("output does not contain \"{}\"", needle),
                    })
                }
            }
        }
    }
}

/// 실패한 프로세스 결과를 권한 거부 / 일반 실패로 분류
pub(crate) fn failure(invocation: &Invocation, output: &CommandOutput) -> KeepAliveError {
    if crate::executor::privilege::is_privilege_denied(&output.stderr) {
        KeepAliveError::PrivilegeDenied(invocation.command_line())
    } else {
        KeepAliveError::CommandFailed {
            command: invocation.command_line(),
            code: output.code,
            stderr: output.stderr.clone(),
        }
    }
}

/// Runs one invocation and applies a success criterion to it.
pub(crate) async fn run_step(
    executor: &dyn CommandExecutor,
    invocation: &Invocation,
    criterion: &SuccessCriterion,
) -> StepResult {
    let result = match executor.run(invocation).await {
        Ok(output) => criterion.check(invocation, &output),
        Err(e) => Err(e),
    };
    StepResult::from_result(invocation.command_line(), &result)
}

/// A remediation strategy: one or more external commands that try to keep
/// the screen awake.
///
/// The runner only ever calls `invoke` and then `classify`/`summarize` on
/// the returned steps, so every variant is driven by the same loop.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Human-readable label shown in the report.
    fn name(&self) -> &str;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Finite
    }

    /// Executes the strategy's commands. Errors are recorded as steps, never
    /// returned.
    async fn invoke(&self, executor: &dyn CommandExecutor) -> Vec<StepResult>;

    /// Unavailable beats Failed beats Succeeded.
    fn classify(&self, steps: &[StepResult]) -> OutcomeStatus {
        aggregate(steps)
    }

    /// One-line diagnostic for the report.
    fn summarize(&self, steps: &[StepResult]) -> Option<String> {
        steps
            .iter()
            .find(|s| !s.is_success())
            .and_then(|s| s.message.clone())
    }
}

pub fn aggregate(steps: &[StepResult]) -> OutcomeStatus {
    if steps.iter().any(|s| s.status == OutcomeStatus::Unavailable) {
        OutcomeStatus::Unavailable
    } else if steps.iter().any(|s| s.status == OutcomeStatus::Failed) {
        OutcomeStatus::Failed
    } else {
        OutcomeStatus::Succeeded
    }
}

/// Keep-alive 기본 전략 목록 (실행 순서대로)
pub fn default_strategies(disable_services: bool) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(toggle::disable_dpms()),
        Box::new(toggle::configure_console()),
        Box::new(toggle::caffeine()),
        Box::new(ServiceInspection::display_services().with_disable(disable_services)),
    ]
}
