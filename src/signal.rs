use std::future::Future;
use tracing::{info, warn};

/// 작업 완료 또는 사용자 중단
#[derive(Debug, PartialEq, Eq)]
pub enum Completion<T> {
    Finished(T),
    Interrupted,
}

/// Races `work` against `interrupt`; whichever finishes first wins and the
/// other is dropped.
pub async fn run_until_interrupted<F, I>(work: F, interrupt: I) -> Completion<F::Output>
where
    F: Future,
    I: Future<Output = ()>,
{
    tokio::select! {
        output = work => Completion::Finished(output),
        _ = interrupt => {
            info!("Received Ctrl+C signal");
            Completion::Interrupted
        }
    }
}

/// Ctrl-C 대기. 핸들러 설치에 실패하면 영원히 대기한다.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
