use crate::strategy::MouseJitter;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "screen-keepalive")]
#[command(version)]
#[command(about = "Keep the screen from dimming or locking", long_about = None)]
pub struct Cli {
    /// 리포트 출력 후 마우스를 주기적으로 움직인다 (Ctrl-C 로 종료)
    #[arg(long)]
    pub jitter: bool,

    /// 마우스 이동 간격 (초)
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = MouseJitter::DEFAULT_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// 활성화된 디스플레이 서비스를 sudo 로 비활성화 (권한 필요)
    #[arg(long)]
    pub disable_services: bool,

    /// 리포트를 JSON 으로 출력
    #[arg(long)]
    pub json: bool,

    /// 디버그 모드
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// 한 번의 실행에 대한 옵션
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub jitter: Option<Duration>,
    pub disable_services: bool,
    pub json: bool,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            jitter: self.jitter.then(|| Duration::from_secs(self.interval)),
            disable_services: self.disable_services,
            json: self.json,
        }
    }

    /// RUST_LOG 이 없을 때의 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "screen_keepalive=debug"
        } else {
            "screen_keepalive=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["screen-keepalive"]);
        let options = cli.options();

        assert_eq!(options.jitter, None);
        assert!(!options.disable_services);
        assert!(!options.json);
        assert_eq!(cli.default_log_filter(), "screen_keepalive=warn");
    }

    #[test]
    fn test_jitter_interval() {
        let cli = Cli::parse_from(["screen-keepalive", "--jitter", "--interval", "5", "-d"]);

        assert_eq!(cli.options().jitter, Some(Duration::from_secs(5)));
        assert_eq!(cli.default_log_filter(), "screen_keepalive=debug");
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Cli::try_parse_from(["screen-keepalive", "--interval", "0"]).is_err());
    }
}
