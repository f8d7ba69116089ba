pub mod runner;
pub mod privilege;
pub mod inspect;
pub mod batch;

#[cfg(test)]
pub mod scripted;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

// Re-exports for convenience (used in commands and strategy modules)
pub use batch::{StrategyPlan, StrategyRunner};
pub use inspect::{ProcessInspector, ProcessSummary};
pub use runner::CommandRunner;

/// 외부 프로그램 호출 한 건 (프로그램 + 고정 인자)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// 리포트와 로그에 표시할 명령줄
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// 종료된 자식 프로세스의 결과
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// 종료 코드 (시그널로 종료되면 None)
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawns external programs and waits for them.
///
/// A missing executable must surface as `KeepAliveError::CommandNotFound`;
/// a non-zero exit is NOT an error at this level, it is returned as a
/// `CommandOutput` so the caller's success criterion can classify it.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        assert_eq!(Invocation::new("xset", &["s", "off"]).command_line(), "xset s off");
        assert_eq!(Invocation::new("ps", &[]).to_string(), "ps");
    }

    #[test]
    fn test_output_success() {
        let ok = CommandOutput { code: Some(0), ..Default::default() };
        let failed = CommandOutput { code: Some(1), ..Default::default() };
        let killed = CommandOutput::default();

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
