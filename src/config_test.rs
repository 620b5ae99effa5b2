use super::*;

// =============================================================================
// parse helpers
// =============================================================================

#[test]
fn api_host_defaults_when_unset() {
    assert_eq!(parse_api_host(None).unwrap(), DEFAULT_API_HOST);
}

#[test]
fn api_host_trims_trailing_slash() {
    assert_eq!(parse_api_host(Some("https://hr.example.test/")).unwrap(), "https://hr.example.test");
}

#[test]
fn api_host_rejects_non_http() {
    let err = parse_api_host(Some("ftp://files")).unwrap_err();
    assert_eq!(err, ConfigError::ApiHost("ftp://files".into()));
}

#[test]
fn guard_policy_defaults_to_cached() {
    assert_eq!(parse_guard_policy(None).unwrap(), GuardPolicy::Cached);
}

#[test]
fn guard_policy_parses_revalidate() {
    assert_eq!(parse_guard_policy(Some(" revalidate ")).unwrap(), GuardPolicy::Revalidate);
}

#[test]
fn guard_policy_unknown_errors() {
    let err = parse_guard_policy(Some("always")).unwrap_err().to_string();
    assert!(err.contains("unknown LEAVE_GUARD_POLICY"));
}

#[test]
fn with_api_host_overrides_only_host() {
    let cfg = ClientConfig::default().with_api_host("http://10.0.0.2:9000/").unwrap();
    assert_eq!(cfg.api_host, "http://10.0.0.2:9000");
    assert_eq!(cfg.timeouts, Timeouts::default());
}

// =============================================================================
// from_env (the only test touching LEAVE_* vars)
// =============================================================================

#[test]
fn from_env_defaults_then_overrides() {
    unsafe {
        std::env::remove_var("LEAVE_API_HOST");
        std::env::remove_var("LEAVE_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LEAVE_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("LEAVE_GUARD_POLICY");
    }
    assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());

    unsafe {
        std::env::set_var("LEAVE_API_HOST", "https://leave.example.test/");
        std::env::set_var("LEAVE_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("LEAVE_CONNECT_TIMEOUT_SECS", "not-a-number");
        std::env::set_var("LEAVE_GUARD_POLICY", "revalidate");
    }
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.api_host, "https://leave.example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 30, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });
    assert_eq!(cfg.guard_policy, GuardPolicy::Revalidate);

    unsafe {
        std::env::remove_var("LEAVE_API_HOST");
        std::env::remove_var("LEAVE_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LEAVE_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("LEAVE_GUARD_POLICY");
    }
}
