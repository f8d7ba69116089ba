use crate::error::Result;
use crate::report::{Outcome, OutcomeStatus, RunReport};
use colored::*;

/// 자동으로 할 수 없는 수동 설정 안내
pub const MANUAL_STEPS: &[&str] = &[
    "Open Display Settings → Screen Lock → Turn Off",
    "Open Display Settings → Power → Screen → Never",
    "Run 'systemctl disable sleep.target suspend.target hibernate.target hybrid-sleep.target'",
];

fn status_tag(status: OutcomeStatus) -> ColoredString {
    match status {
        OutcomeStatus::Succeeded => "[OK]".green().bold(),
        OutcomeStatus::Failed => "[X]".red().bold(),
        OutcomeStatus::Unavailable => "[--]".yellow(),
    }
}

/// 전략 결과 한 줄
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut line = format!("{} {}", status_tag(outcome.status), outcome.name);
    if let Some(diagnostic) = &outcome.diagnostic {
        line.push_str(&format!(" - {}", diagnostic.dimmed()));
    }
    line
}

/// 리포트 전체를 사람이 읽는 형식으로 렌더링
pub fn render_text(report: &RunReport) -> String {
    let mut lines: Vec<String> = report.outcomes().iter().map(render_outcome).collect();

    lines.push(String::new());
    lines.push(format!(
        "{} {} succeeded, {} failed, {} unavailable ({} strategies)",
        "Summary:".bold(),
        report.count(OutcomeStatus::Succeeded).to_string().green(),
        report.count(OutcomeStatus::Failed).to_string().red(),
        report.count(OutcomeStatus::Unavailable).to_string().yellow(),
        report.len()
    ));

    if let Some(processes) = report.processes() {
        let running = processes.running();
        if running.is_empty() {
            lines.push(format!("{} No keep-alive helper processes found", "[i]".cyan()));
        }
        for name in running {
            lines.push(format!("{} {} processes running", "[v]".green(), name));
        }
    }

    lines.join("\n")
}

/// 리포트를 한 줄 JSON 으로 렌더링 (--json)
pub fn render_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// 블로킹 전략 결과를 한 줄 JSON 으로 렌더링 (리포트 다음 줄)
pub fn render_outcome_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}
