use crate::error::Result;
use crate::executor::{CommandExecutor, Invocation};
use crate::strategy::failure;
use serde::Serialize;

/// 프로세스 목록에서 찾을 keep-alive 도우미
const WATCHED_PROCESSES: &[&str] = &["xset", "caffeine"];

/// 실행 중인 keep-alive 도우미 요약
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessSummary {
    /// (프로세스 이름, 목록에 보이는지)
    pub helpers: Vec<(String, bool)>,
}

impl ProcessSummary {
    pub fn running(&self) -> Vec<&str> {
        self.helpers
            .iter()
            .filter(|(_, running)| *running)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Reads the process listing once for the final status summary.
pub struct ProcessInspector;

impl ProcessInspector {
    pub async fn inspect(executor: &dyn CommandExecutor) -> Result<ProcessSummary> {
        let invocation = Invocation::new("ps", &["aux"]);
        let output = executor.run(&invocation).await?;

        if !output.success() {
            return Err(failure(&invocation, &output));
        }

        Ok(Self::summarize(&output.stdout))
    }

    pub fn summarize(listing: &str) -> ProcessSummary {
        ProcessSummary {
            helpers: WATCHED_PROCESSES
                .iter()
                .map(|name| (name.to_string(), listing.contains(name)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeepAliveError;
    use crate::executor::scripted::ScriptedExecutor;

    const LISTING: &str = "USER PID %CPU %MEM VSZ RSS TTY STAT START TIME COMMAND\n\
        alice 4242 0.0 0.1 1234 5678 ? Sl 10:00 0:00 /usr/bin/caffeine -a\n";

    #[test]
    fn test_summarize_listing() {
        let summary = ProcessInspector::summarize(LISTING);
        assert_eq!(summary.running(), vec!["caffeine"]);
        assert_eq!(summary.helpers.len(), 2);
    }

    #[tokio::test]
    async fn test_inspect_uses_ps() {
        let executor = ScriptedExecutor::new().ok("ps aux", LISTING);

        let summary = ProcessInspector::inspect(&executor).await.unwrap();

        assert_eq!(summary.running(), vec!["caffeine"]);
        assert_eq!(executor.calls(), vec!["ps aux"]);
    }

    #[tokio::test]
    async fn test_inspect_without_ps() {
        let executor = ScriptedExecutor::new();

        let err = ProcessInspector::inspect(&executor).await.unwrap_err();
        assert!(matches!(err, KeepAliveError::CommandNotFound(_)));
    }
}
