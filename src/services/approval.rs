//! Manager approval workflow.

use serde_json::Value;

use super::{ServiceError, resolve};
use crate::net::LeaveApi;
use crate::types::ApprovalAction;

const PENDING_FAILED: &str = "獲取待審核列表失敗";
const ACTION_FAILED: &str = "審核操作失敗";

#[derive(Clone)]
pub struct ApprovalService {
    api: LeaveApi,
}

impl ApprovalService {
    #[must_use]
    pub fn new(api: LeaveApi) -> Self {
        Self { api }
    }

    /// Approval steps waiting on the signed-in manager.
    pub async fn get_pending_approvals(&self) -> Result<Value, ServiceError> {
        let envelope = self.api.get_pending_approvals().await?;
        resolve(envelope, PENDING_FAILED)
    }

    /// Approve or reject one step. Returns the backend's confirmation body.
    pub async fn submit_approval_action(
        &self,
        step_id: i64,
        action: ApprovalAction,
        comments: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let envelope = self.api.submit_approval_action(step_id, action, comments).await?;
        let body = resolve(envelope, ACTION_FAILED)?;
        tracing::info!(step_id, %action, "approval action submitted");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "approval_test.rs"]
mod tests;
