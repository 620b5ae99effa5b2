//! API layer: one method per backend operation.
//!
//! Each method picks its endpoint, verb and payload encoding, then hands the
//! request to the injected [`Transport`]. Envelopes come back untouched;
//! interpreting `success` is the service layer's job.

use std::sync::Arc;

use super::endpoints::Endpoint;
use super::envelope::Envelope;
use super::transport::{ApiRequest, Transport, TransportError};
use crate::types::{ApprovalAction, ApprovalComments, Identifier, LeaveApplicationRequest, ManagerQuery, Record};

/// Handle to the backend API. Cheap to clone; all clones share one transport.
#[derive(Clone)]
pub struct LeaveApi {
    transport: Arc<dyn Transport>,
}

impl LeaveApi {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        self.transport.send(request).await
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /api/login` with form-urlencoded `empId` and `password`.
    pub async fn login(&self, emp_id: &str, password: &str) -> Result<Envelope, TransportError> {
        let req = ApiRequest::post(Endpoint::Login.fixed()).form(&[("empId", emp_id), ("password", password)]);
        self.call(req).await
    }

    pub async fn logout(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::post(Endpoint::Logout.fixed())).await
    }

    /// `GET /api/user`: identity bound to the current cookie session.
    pub async fn user_info(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::UserInfo.fixed())).await
    }

    // =========================================================================
    // LEAVE APPLICATIONS
    // =========================================================================

    pub async fn get_all_leave_type(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::GetAllLeaveType.fixed())).await
    }

    pub async fn apply_leave_application(&self, request: &LeaveApplicationRequest) -> Result<Envelope, TransportError> {
        let req = ApiRequest::post(Endpoint::ApplyLeaveApplication.fixed()).json(request)?;
        self.call(req).await
    }

    pub async fn get_leave_summary(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::LeaveSummary.fixed())).await
    }

    // =========================================================================
    // APPROVALS
    // =========================================================================

    pub async fn get_pending_approvals(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::PendingApprovals.fixed())).await
    }

    /// `POST /api/approvals/{stepId}/{approve|reject}` with `{ comments }`.
    pub async fn submit_approval_action(
        &self,
        step_id: i64,
        action: ApprovalAction,
        comments: Option<&str>,
    ) -> Result<Envelope, TransportError> {
        let step_id = step_id.to_string();
        let path = Endpoint::ApprovalAction.path(&[("stepId", &step_id), ("action", action.as_str())]);
        let req = ApiRequest::post(path).json(&ApprovalComments { comments })?;
        self.call(req).await
    }

    // =========================================================================
    // EMPLOYEES
    // =========================================================================

    /// `GET /api/employees`, filtered by department when one is given.
    pub async fn get_employees(&self, department_id: Option<i64>) -> Result<Envelope, TransportError> {
        let req = ApiRequest::get(Endpoint::Employees.fixed()).query_opt("departmentId", department_id);
        self.call(req).await
    }

    pub async fn create_employee(&self, record: &Record) -> Result<Envelope, TransportError> {
        let req = ApiRequest::post(Endpoint::Employees.fixed()).json(record)?;
        self.call(req).await
    }

    pub async fn update_employee(&self, id: &Identifier, record: &Record) -> Result<Envelope, TransportError> {
        let req = ApiRequest::put(employee_path(id)).json(record)?;
        self.call(req).await
    }

    pub async fn get_employee(&self, id: &Identifier) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(employee_path(id))).await
    }

    // =========================================================================
    // OPTIONS
    // =========================================================================

    pub async fn get_department_options(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::DepartmentOptions.fixed())).await
    }

    pub async fn get_title_options(&self) -> Result<Envelope, TransportError> {
        self.call(ApiRequest::get(Endpoint::TitleOptions.fixed())).await
    }

    pub async fn get_manager_options(&self, query: &ManagerQuery) -> Result<Envelope, TransportError> {
        let req = ApiRequest::get(Endpoint::ManagerOptions.fixed())
            .query_opt("departmentId", query.department_id)
            .query_opt("employeeId", query.employee_id.as_ref());
        self.call(req).await
    }
}

fn employee_path(id: &Identifier) -> String {
    Endpoint::Employee.path(&[("id", &id.to_string())])
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
