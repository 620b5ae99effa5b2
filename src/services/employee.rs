//! Employee administration and the dropdown option sources it needs.
//!
//! Employee records and option lists are backend-shaped, so every method
//! hands back the envelope body untouched as JSON.

use serde_json::Value;

use super::{ServiceError, resolve};
use crate::net::LeaveApi;
use crate::types::{Identifier, ManagerQuery, Record};

const LIST_FAILED: &str = "獲取員工列表失敗";
const CREATE_FAILED: &str = "新增員工失敗";
const UPDATE_FAILED: &str = "更新員工失敗";
const DETAILS_FAILED: &str = "獲取員工詳細資料失敗";
const DEPARTMENTS_FAILED: &str = "獲取部門選項失敗";
const TITLES_FAILED: &str = "獲取職稱選項失敗";
const MANAGERS_FAILED: &str = "獲取主管選項失敗";

#[derive(Clone)]
pub struct EmployeeService {
    api: LeaveApi,
}

impl EmployeeService {
    #[must_use]
    pub fn new(api: LeaveApi) -> Self {
        Self { api }
    }

    pub async fn get_employee_list(&self, department_id: Option<i64>) -> Result<Value, ServiceError> {
        let envelope = self.api.get_employees(department_id).await?;
        resolve(envelope, LIST_FAILED)
    }

    /// Create an employee. The body is returned as sent; it may be the new
    /// id or the whole created record.
    pub async fn create_new_employee(&self, record: &Record) -> Result<Value, ServiceError> {
        let envelope = self.api.create_employee(record).await?;
        let body: Value = resolve(envelope, CREATE_FAILED)?;
        tracing::info!(id = ?created_id(&body), "employee created");
        Ok(body)
    }

    pub async fn update_existing_employee(&self, id: &Identifier, record: &Record) -> Result<Value, ServiceError> {
        let envelope = self.api.update_employee(id, record).await?;
        resolve(envelope, UPDATE_FAILED)
    }

    pub async fn get_employee_details(&self, id: &Identifier) -> Result<Value, ServiceError> {
        let envelope = self.api.get_employee(id).await?;
        resolve(envelope, DETAILS_FAILED)
    }

    pub async fn fetch_department_options(&self) -> Result<Value, ServiceError> {
        let envelope = self.api.get_department_options().await?;
        resolve(envelope, DEPARTMENTS_FAILED)
    }

    pub async fn fetch_title_options(&self) -> Result<Value, ServiceError> {
        let envelope = self.api.get_title_options().await?;
        resolve(envelope, TITLES_FAILED)
    }

    pub async fn fetch_manager_options(&self, query: &ManagerQuery) -> Result<Value, ServiceError> {
        let envelope = self.api.get_manager_options(query).await?;
        resolve(envelope, MANAGERS_FAILED)
    }
}

/// Id of a freshly created employee, read leniently from a create reply:
/// either the bare id or an object carrying `id`.
#[must_use]
pub fn created_id(body: &Value) -> Option<Identifier> {
    let raw = match body {
        Value::Object(record) => record.get("id")?,
        other => other,
    };
    match raw {
        Value::Number(n) => n.as_i64().map(Identifier::Number),
        Value::String(s) if !s.is_empty() => Some(Identifier::Text(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
#[path = "employee_test.rs"]
mod tests;
