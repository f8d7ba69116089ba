use clap::Parser;
use colored::*;
use screen_keepalive::cli::Cli;
use screen_keepalive::commands::execute_keepalive;
use screen_keepalive::error::Result;
use screen_keepalive::executor::CommandRunner;
use screen_keepalive::signal::{self, Completion};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    let options = cli.options();
    let executor = Arc::new(CommandRunner::new());

    let work = execute_keepalive(&options, executor);
    match signal::run_until_interrupted(work, signal::ctrl_c()).await {
        Completion::Finished(result) => result,
        Completion::Interrupted => {
            // 사용자 중단은 에러가 아니다. JSON 모드의 stdout 은 JSON 전용
            let notice = format!("{} Screen keep-alive stopped.", "[BYE]".cyan());
            if options.json {
                eprintln!("{}", notice);
            } else {
                println!("\n\n{}", notice);
            }
            Ok(())
        }
    }
}
