use crate::error::{KeepAliveError, Result};
use crate::executor::ProcessSummary;
use serde::Serialize;

/// 전략 실행 결과 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
    /// 실행 파일을 찾을 수 없음
    Unavailable,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Succeeded => "succeeded",
            OutcomeStatus::Failed => "failed",
            OutcomeStatus::Unavailable => "unavailable",
        }
    }
}

impl From<&KeepAliveError> for OutcomeStatus {
    fn from(err: &KeepAliveError) -> Self {
        match err {
            KeepAliveError::CommandNotFound(_) => OutcomeStatus::Unavailable,
            _ => OutcomeStatus::Failed,
        }
    }
}

/// 전략 안의 명령어 한 건의 결과
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    /// 실행한 명령줄
    pub command: String,
    pub status: OutcomeStatus,
    /// 진단 메시지 (실패 사유, 또는 조회 결과)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StepResult {
    pub fn succeeded(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            status: OutcomeStatus::Succeeded,
            message: None,
        }
    }

    pub fn from_error(command: impl Into<String>, err: &KeepAliveError) -> Self {
        Self {
            command: command.into(),
            status: OutcomeStatus::from(err),
            message: Some(err.diagnostic()),
        }
    }

    pub fn from_result(command: impl Into<String>, result: &Result<()>) -> Self {
        match result {
            Ok(()) => Self::succeeded(command),
            Err(e) => Self::from_error(command, e),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}

/// 전략 하나의 실행 결과
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// 전략 이름
    pub name: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    /// 시도한 명령어별 결과 (실행 순서대로)
    pub steps: Vec<StepResult>,
    /// 실행 시간 (밀리초)
    pub duration_ms: u128,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}

/// 한 번의 실행에서 나온 결과 모음
///
/// 결과는 추가만 되고, 이미 기록된 결과는 바뀌지 않는다.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    outcomes: Vec<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processes: Option<ProcessSummary>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn statuses(&self) -> Vec<OutcomeStatus> {
        self.outcomes.iter().map(|o| o.status).collect()
    }

    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_success)
    }

    pub fn set_processes(&mut self, summary: ProcessSummary) {
        self.processes = Some(summary);
    }

    pub fn processes(&self) -> Option<&ProcessSummary> {
        self.processes.as_ref()
    }
}
