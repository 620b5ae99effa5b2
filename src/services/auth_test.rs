use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::net::test_helpers::{MockTransport, api_for};
use crate::session::Session;

fn service(mock: &Arc<MockTransport>) -> (AuthService, SessionStore) {
    let session = SessionStore::new();
    (AuthService::new(api_for(mock), session.clone()), session)
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_success_sets_session() {
    let mock = MockTransport::new();
    mock.push_ok(json!({ "id": "E001", "name": "Hsu", "roles": ["HR"] }));
    let (auth, session) = service(&mock);

    let user = auth.login("E001", "pw").await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Hsu"));

    let s = session.snapshot().await;
    assert!(s.is_logged_in);
    assert!(s.roles.contains("HR"));
}

#[tokio::test]
async fn login_rejected_leaves_session_untouched() {
    let mock = MockTransport::new();
    mock.push_failure(Some("帳號或密碼錯誤"));
    let (auth, session) = service(&mock);

    let err = auth.login("E001", "bad").await.unwrap_err();
    assert_eq!(err.to_string(), "帳號或密碼錯誤");
    assert_eq!(session.snapshot().await, Session::default());
}

#[tokio::test]
async fn login_rejected_without_message_uses_fallback() {
    let mock = MockTransport::new();
    mock.push_failure(None);
    let (auth, _) = service(&mock);
    assert_eq!(auth.login("x", "y").await.unwrap_err().to_string(), LOGIN_FAILED);
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_clears_session() {
    let mock = MockTransport::new();
    mock.push_ok(json!({ "id": 1, "name": "A", "roles": ["ADMIN"] }));
    mock.push_ok(json!(null));
    let (auth, session) = service(&mock);
    auth.login("1", "pw").await.unwrap();

    auth.logout().await.unwrap();
    assert_eq!(session.snapshot().await, Session::cleared());
    assert_eq!(mock.requests()[1].path, "/api/logout");
}

#[tokio::test]
async fn logout_transport_failure_still_clears() {
    let mock = MockTransport::new();
    mock.push_unreachable();
    let (auth, session) = service(&mock);
    session
        .set_session(UserProfile { id: None, name: Some("A".into()), roles: None })
        .await;

    let err = auth.logout().await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
    assert!(!session.is_logged_in().await);
}

#[tokio::test]
async fn logout_rejected_uses_fallback() {
    let mock = MockTransport::new();
    mock.push_failure(None);
    let (auth, _) = service(&mock);
    assert_eq!(auth.logout().await.unwrap_err().to_string(), LOGOUT_FAILED);
}

// =============================================================================
// current_user
// =============================================================================

#[tokio::test]
async fn current_user_does_not_touch_session() {
    let mock = MockTransport::new();
    mock.push_ok(json!({ "id": 2, "name": "B", "roles": [] }));
    let (auth, session) = service(&mock);
    let user = auth.current_user().await.unwrap();
    assert_eq!(user.name.as_deref(), Some("B"));
    assert!(!session.is_initialized().await);
}

#[tokio::test]
async fn current_user_failure_fallback() {
    let mock = MockTransport::new();
    mock.push_failure(None);
    let (auth, _) = service(&mock);
    assert_eq!(auth.current_user().await.unwrap_err().to_string(), USER_INFO_FAILED);
}
