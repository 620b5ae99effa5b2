use serde_json::json;
use time::{Date, Month};

use super::*;
use crate::net::test_helpers::{MockTransport, api_for};
use crate::net::transport::{Method, RequestBody};

// =============================================================================
// auth
// =============================================================================

#[tokio::test]
async fn login_posts_form_credentials() {
    let mock = MockTransport::new();
    api_for(&mock).login("E001", "secret").await.unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::Post);
    assert_eq!(reqs[0].path, "/api/login");
    assert_eq!(
        reqs[0].body,
        RequestBody::Form(vec![("empId".into(), "E001".into()), ("password".into(), "secret".into())])
    );
}

#[tokio::test]
async fn logout_posts_without_body() {
    let mock = MockTransport::new();
    api_for(&mock).logout().await.unwrap();
    let reqs = mock.requests();
    assert_eq!(reqs[0].method, Method::Post);
    assert_eq!(reqs[0].path, "/api/logout");
    assert_eq!(reqs[0].body, RequestBody::Empty);
}

#[tokio::test]
async fn user_info_gets_current_user() {
    let mock = MockTransport::new();
    mock.push_ok(json!({ "id": 1, "name": "A", "roles": [] }));
    let env = api_for(&mock).user_info().await.unwrap();
    assert!(env.success);
    assert_eq!(mock.requests()[0].path, "/api/user");
    assert_eq!(mock.requests()[0].method, Method::Get);
}

// =============================================================================
// leave
// =============================================================================

#[tokio::test]
async fn apply_leave_posts_json() {
    let mock = MockTransport::new();
    let day = Date::from_calendar_date(2025, Month::May, 20).unwrap();
    let req = LeaveApplicationRequest::new(Identifier::Number(4), day, day);
    api_for(&mock).apply_leave_application(&req).await.unwrap();

    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/api/leaveapplications/applyingleaveapplication");
    let RequestBody::Json(body) = &sent.body else { panic!("expected JSON body") };
    assert_eq!(body["leaveTypeId"], 4);
    assert_eq!(body["startDate"], "2025-05-20");
}

#[tokio::test]
async fn leave_type_and_summary_paths() {
    let mock = MockTransport::new();
    let api = api_for(&mock);
    api.get_all_leave_type().await.unwrap();
    api.get_leave_summary().await.unwrap();
    let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/leaveapplications/getallleavetype", "/api/leaveapplications/summary"]);
}

// =============================================================================
// approvals
// =============================================================================

#[tokio::test]
async fn submit_approval_action_posts_exactly_once() {
    let mock = MockTransport::new();
    api_for(&mock)
        .submit_approval_action(101, ApprovalAction::Approve, Some("ok"))
        .await
        .unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::Post);
    assert_eq!(reqs[0].path, "/api/approvals/101/approve");
    assert_eq!(reqs[0].body, RequestBody::Json(json!({ "comments": "ok" })));
}

#[tokio::test]
async fn submit_reject_uses_reject_segment() {
    let mock = MockTransport::new();
    api_for(&mock)
        .submit_approval_action(7, ApprovalAction::Reject, None)
        .await
        .unwrap();
    assert_eq!(mock.requests()[0].path, "/api/approvals/7/reject");
}

// =============================================================================
// employees
// =============================================================================

#[tokio::test]
async fn get_employees_without_department_has_no_query() {
    let mock = MockTransport::new();
    api_for(&mock).get_employees(None).await.unwrap();
    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.path, "/api/employees");
    assert!(sent.query_value("departmentId").is_none());
}

#[tokio::test]
async fn get_employees_with_department_sets_query() {
    let mock = MockTransport::new();
    api_for(&mock).get_employees(Some(5)).await.unwrap();
    assert_eq!(mock.requests()[0].query_value("departmentId"), Some("5"));
}

#[tokio::test]
async fn update_employee_puts_to_id_path() {
    let mock = MockTransport::new();
    let mut record = Record::new();
    record.insert("name".into(), json!("Ann"));
    api_for(&mock)
        .update_employee(&Identifier::Number(42), &record)
        .await
        .unwrap();

    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.path, "/api/employees/42");
    assert_eq!(sent.body, RequestBody::Json(json!({ "name": "Ann" })));
}

#[tokio::test]
async fn create_and_get_employee_paths() {
    let mock = MockTransport::new();
    let api = api_for(&mock);
    api.create_employee(&Record::new()).await.unwrap();
    api.get_employee(&Identifier::from("E9")).await.unwrap();
    let reqs = mock.requests();
    assert_eq!((reqs[0].method, reqs[0].path.as_str()), (Method::Post, "/api/employees"));
    assert_eq!((reqs[1].method, reqs[1].path.as_str()), (Method::Get, "/api/employees/E9"));
}

// =============================================================================
// options
// =============================================================================

#[tokio::test]
async fn manager_options_forwards_present_filters_only() {
    let mock = MockTransport::new();
    let query = ManagerQuery { department_id: Some(2), employee_id: None };
    api_for(&mock).get_manager_options(&query).await.unwrap();
    let sent = &mock.requests()[0];
    assert_eq!(sent.path, "/api/options/managers");
    assert_eq!(sent.query, vec![("departmentId".to_owned(), "2".to_owned())]);
}

#[tokio::test]
async fn department_and_title_option_paths() {
    let mock = MockTransport::new();
    let api = api_for(&mock);
    api.get_department_options().await.unwrap();
    api.get_title_options().await.unwrap();
    let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/options/departments", "/api/options/titles"]);
}

// =============================================================================
// transport failure
// =============================================================================

#[tokio::test]
async fn transport_error_propagates_unchanged() {
    let mock = MockTransport::new();
    mock.push_unreachable();
    let err = api_for(&mock).get_pending_approvals().await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
}
