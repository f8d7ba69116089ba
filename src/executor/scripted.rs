//! Scripted executor for tests: answers invocations from a fixed table
//! instead of spawning processes.

use crate::error::{KeepAliveError, Result};
use crate::executor::{CommandExecutor, CommandOutput, Invocation};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Output(CommandOutput),
    Missing,
}

/// Unknown commands behave as if the program is not installed.
#[derive(Default)]
pub struct ScriptedExecutor {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, command_line: &str, stdout: &str) -> Self {
        self.reply(command_line, 0, stdout, "")
    }

    pub fn fail(self, command_line: &str, code: i32, stderr: &str) -> Self {
        self.reply(command_line, code, "", stderr)
    }

    pub fn reply(mut self, command_line: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.replies.insert(
            command_line.to_string(),
            Reply::Output(CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
        );
        self
    }

    pub fn missing(mut self, command_line: &str) -> Self {
        self.replies.insert(command_line.to_string(), Reply::Missing);
        self
    }

    /// 호출된 명령줄 목록 (호출 순서대로)
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let command_line = invocation.command_line();
        self.calls.lock().unwrap().push(command_line.clone());

        match self.replies.get(&command_line) {
            Some(Reply::Output(output)) => Ok(output.clone()),
            Some(Reply::Missing) | None => Err(KeepAliveError::CommandNotFound(
                invocation.program.clone(),
            )),
        }
    }
}
