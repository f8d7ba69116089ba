use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 스피너 스타일 (전략 실행 중)
///
/// indicatif 는 stderr 에 그리므로 stderr 가 터미널이 아니면 알아서 숨긴다.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// 완료 메시지와 함께 스피너 종료
pub fn finish_spinner(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// 출력 없이 스피너를 숨긴다 (JSON 모드)
pub fn hidden_spinner() -> ProgressBar {
    ProgressBar::hidden()
}
