use super::*;

// =============================================================================
// parse
// =============================================================================

#[test]
fn parse_plain_path() {
    let loc = Location::parse("/pages/leaverequest");
    assert_eq!(loc.path, "/pages/leaverequest");
    assert!(loc.query.is_empty());
}

#[test]
fn parse_decodes_query() {
    let loc = Location::parse("/auth/login?redirect=%2Fpages%2Fleaveapproval");
    assert_eq!(loc.path, "/auth/login");
    assert_eq!(loc.query_value("redirect"), Some("/pages/leaveapproval"));
}

#[test]
fn parse_strips_hash_prefix_and_trailing_slash() {
    let loc = Location::parse("#/dashboard/");
    assert_eq!(loc.path, "/dashboard");
}

#[test]
fn parse_empty_is_root() {
    assert_eq!(Location::parse("").path, "/");
}

#[test]
fn parse_relative_gets_leading_slash() {
    assert_eq!(Location::parse("landing").path, "/landing");
}

// =============================================================================
// full_path
// =============================================================================

#[test]
fn full_path_without_query() {
    assert_eq!(Location::new("/dashboard").full_path(), "/dashboard");
}

#[test]
fn full_path_encodes_query() {
    let loc = Location::new("/auth/login").with_query("redirect", "/pages/leaveapproval?tab=2");
    let full = loc.full_path();
    assert!(full.starts_with("/auth/login?redirect="));
    assert!(!full["/auth/login?".len()..].contains('/'));
}

#[test]
fn full_path_parse_round_trip_keeps_values() {
    let loc = Location::new("/pages/employeemanagement").with_query("dept", "研發部");
    let back = Location::parse(&loc.full_path());
    assert_eq!(back, loc);
}
