use crate::error::{KeepAliveError, Result};
use crate::executor::{CommandExecutor, CommandOutput, Invocation};
use async_trait::async_trait;
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::debug;

/// 실제 시스템에서 외부 명령어를 실행하는 실행기
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for CommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!(command = %invocation, "spawning");

        // 타임아웃 없음: 멈춘 명령어는 전체 시퀀스를 막는다
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => KeepAliveError::CommandNotFound(invocation.program.clone()),
                ErrorKind::PermissionDenied => {
                    KeepAliveError::PrivilegeDenied(invocation.command_line())
                }
                _ => KeepAliveError::IoError(e),
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        debug!(command = %invocation, code = ?result.code, "finished");

        Ok(result)
    }
}
