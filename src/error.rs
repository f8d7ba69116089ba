use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepAliveError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command failed: {command} (exit code {code:?}): {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Permission denied: {0}")]
    PrivilegeDenied(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl KeepAliveError {
    /// 리포트에 표시할 짧은 진단 메시지
    pub fn diagnostic(&self) -> String {
        match self {
            KeepAliveError::CommandNotFound(program) => format!("{} is not installed", program),
            KeepAliveError::CommandFailed { command, code, stderr } => {
                let stderr = stderr.trim();
                match (code, stderr.is_empty()) {
                    (Some(code), true) => format!("{} exited with status {}", command, code),
                    (Some(code), false) => {
                        format!("{} exited with status {}: {}", command, code, stderr)
                    }
                    (None, _) => format!("{} was terminated by a signal", command),
                }
            }
            KeepAliveError::PrivilegeDenied(command) => {
                format!("{}: insufficient privileges", command)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeepAliveError>;
