use once_cell::sync::Lazy;
use regex::Regex;

/// 사전 컴파일된 정규표현식: sudo/systemctl/polkit 의 권한 거부 메시지
static PRIVILEGE_DENIED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(permission denied|operation not permitted|access denied",
        r"|a password is required|not in the sudoers",
        r"|interactive authentication required|authentication is required",
        r"|must be (run as )?root)",
    ))
    .unwrap()
});

/// 실패한 명령어의 stderr 가 권한 부족을 나타내는지 확인
///
/// # Examples
/// ```
/// use screen_keepalive::executor::privilege::is_privilege_denied;
///
/// assert!(is_privilege_denied("sudo: a password is required"));
/// assert!(!is_privilege_denied("Unit gdm.service does not exist."));
/// ```
pub fn is_privilege_denied(stderr: &str) -> bool {
    PRIVILEGE_DENIED_REGEX.is_match(stderr)
}
