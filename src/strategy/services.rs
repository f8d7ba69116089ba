use crate::error::KeepAliveError;
use crate::executor::{CommandExecutor, Invocation};
use crate::report::{OutcomeStatus, StepResult};
use crate::strategy::{run_step, Strategy, SuccessCriterion};
use async_trait::async_trait;
use tracing::{debug, warn};

/// 화면 잠금과 관련된 디스플레이 서비스
const DISPLAY_SERVICES: &[&str] = &["display-manager.service", "gdm.service", "sddm.service"];

/// Queries service-manager state for a list of units and, when allowed,
/// disables the enabled ones through non-interactive sudo.
///
/// Each service is checked independently: a denied disable only fails that
/// one service.
#[derive(Debug, Clone)]
pub struct ServiceInspection {
    services: Vec<String>,
    disable: bool,
}

impl ServiceInspection {
    pub fn new(services: &[&str]) -> Self {
        Self {
            services: services.iter().map(|s| s.to_string()).collect(),
            disable: false,
        }
    }

    pub fn display_services() -> Self {
        Self::new(DISPLAY_SERVICES)
    }

    pub fn with_disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }

    fn query(service: &str) -> Invocation {
        Invocation::new("systemctl", &["is-enabled", service])
    }

    fn disable_command(service: &str) -> Invocation {
        // -n: 비밀번호가 필요하면 묻지 않고 실패
        Invocation::new("sudo", &["-n", "systemctl", "disable", service])
    }

    fn is_disable_step(step: &StepResult) -> bool {
        step.command.starts_with("sudo ")
    }
}

/// `systemctl is-enabled` 의 첫 줄.
/// "disabled" 도 "enabled" 를 포함하므로 정확히 비교한다.
fn unit_state(stdout: &str) -> &str {
    match stdout.lines().next().map(str::trim) {
        Some(state) if !state.is_empty() => state,
        _ => "unknown",
    }
}

fn service_of(command: &str) -> &str {
    command.rsplit(' ').next().unwrap_or(command)
}

#[async_trait]
impl Strategy for ServiceInspection {
    fn name(&self) -> &str {
        "Inspect display services"
    }

    async fn invoke(&self, executor: &dyn CommandExecutor) -> Vec<StepResult> {
        let mut steps = Vec::new();

        for service in &self.services {
            let query = Self::query(service);

            // is-enabled 는 비활성 유닛에 대해 0 이 아닌 코드로 종료하므로
            // 종료 코드로 판정하지 않는다
            let output = match executor.run(&query).await {
                Ok(output) => output,
                Err(e) => {
                    let step = StepResult::from_error(query.command_line(), &e);
                    let missing = matches!(e, KeepAliveError::CommandNotFound(_));
                    steps.push(step);
                    if missing {
                        break;
                    }
                    continue;
                }
            };

            let state = unit_state(&output.stdout);
            debug!(service = %service, state = %state, "queried service");
            let enabled = state == "enabled";

            // 비활성화하지 않을 서비스는 조회 결과에 메모를 붙인다
            let message = if enabled && !self.disable {
                format!("{} is enabled (left unchanged)", service)
            } else {
                format!("{}: {}", service, state)
            };
            steps.push(StepResult::succeeded(query.command_line()).with_message(message));

            if !enabled || !self.disable {
                continue;
            }

            let disable = Self::disable_command(service);
            let mut step = run_step(executor, &disable, &SuccessCriterion::ExitStatus).await;
            if step.status == OutcomeStatus::Unavailable {
                // systemctl 은 있으나 권한 상승 수단이 없음
                step.status = OutcomeStatus::Failed;
            }
            if step.is_success() {
                step = step.with_message(format!("disabled {}", service));
            } else {
                warn!(service = %service, "could not disable service");
            }
            steps.push(step);
        }

        steps
    }

    fn summarize(&self, steps: &[StepResult]) -> Option<String> {
        if let Some(missing) = steps.iter().find(|s| s.status == OutcomeStatus::Unavailable) {
            return missing.message.clone();
        }

        let (disabled, denied): (Vec<&StepResult>, Vec<&StepResult>) = steps
            .iter()
            .filter(|s| Self::is_disable_step(s))
            .partition(|s| s.is_success());

        let mut parts = Vec::new();
        if !disabled.is_empty() {
            let names: Vec<&str> = disabled.iter().map(|s| service_of(&s.command)).collect();
            parts.push(format!("disabled: {}", names.join(", ")));
        }
        if !denied.is_empty() {
            let names: Vec<&str> = denied.iter().map(|s| service_of(&s.command)).collect();
            parts.push(format!("could not disable: {}", names.join(", ")));
        }
        if parts.is_empty() {
            let left: Vec<&str> = steps
                .iter()
                .filter_map(|s| s.message.as_deref())
                .filter(|m| m.ends_with("(left unchanged)"))
                .collect();
            if !left.is_empty() {
                return Some(left.join("; "));
            }
            return steps
                .iter()
                .find(|s| !s.is_success())
                .and_then(|s| s.message.clone());
        }

        Some(parts.join("; "))
    }
}
