//! Leave types, leave submission and the caller's leave summary.

use serde_json::Value;

use super::{ServiceError, resolve};
use crate::net::LeaveApi;
use crate::types::LeaveApplicationRequest;

const LEAVE_TYPES_FAILED: &str = "取得請假類型失敗";
const APPLY_FAILED: &str = "申請失敗";
const SUMMARY_FAILED: &str = "取得請假統計失敗";

#[derive(Clone)]
pub struct LeaveApplicationService {
    api: LeaveApi,
}

impl LeaveApplicationService {
    #[must_use]
    pub fn new(api: LeaveApi) -> Self {
        Self { api }
    }

    pub async fn get_leave_types(&self) -> Result<Value, ServiceError> {
        let envelope = self.api.get_all_leave_type().await?;
        resolve(envelope, LEAVE_TYPES_FAILED)
    }

    pub async fn submit_leave_application(&self, request: &LeaveApplicationRequest) -> Result<Value, ServiceError> {
        let envelope = self.api.apply_leave_application(request).await?;
        resolve(envelope, APPLY_FAILED)
    }

    /// Summary shape is backend-defined (balances per type, used days, ...).
    pub async fn get_leave_summary(&self) -> Result<Value, ServiceError> {
        let envelope = self.api.get_leave_summary().await?;
        resolve(envelope, SUMMARY_FAILED)
    }
}

#[cfg(test)]
#[path = "leave_test.rs"]
mod tests;
