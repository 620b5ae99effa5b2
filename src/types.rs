//! Wire types shared by the API and service layers.
//!
//! DESIGN
//! ======
//! Only the shapes the client reasons about are typed (identity, leave
//! request, approval action, query filters). Open-shaped backend records
//! such as employees or dropdown options stay as JSON objects so no field
//! is lost on a read-modify-write cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

use crate::util::date::serde_date;

/// Open-shaped JSON object returned by the backend.
pub type Record = serde_json::Map<String, Value>;

// =============================================================================
// IDENTIFIER
// =============================================================================

/// Backend identifier, sent as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl FromStr for Identifier {
    type Err = std::convert::Infallible;

    /// Numeric input becomes `Number`, anything else `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(|_| Self::Text(s.to_owned()), Self::Number))
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity payload of `/api/user` and `/api/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub name: Option<String>,
    /// `null` and absent both mean "no roles".
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

// =============================================================================
// LEAVE
// =============================================================================

/// Body of `POST /api/leaveapplications/applyingleaveapplication`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationRequest {
    pub leave_type_id: Identifier,
    #[serde(with = "serde_date")]
    pub start_date: Date,
    #[serde(with = "serde_date")]
    pub end_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Extra form fields forwarded as-is.
    #[serde(flatten)]
    pub extra: Record,
}

impl LeaveApplicationRequest {
    #[must_use]
    pub fn new(leave_type_id: Identifier, start_date: Date, end_date: Date) -> Self {
        Self { leave_type_id, start_date, end_date, reason: None, extra: Record::new() }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

// =============================================================================
// APPROVAL
// =============================================================================

/// Decision on an approval step; rendered as the last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown approval action `{0}` (expected `approve` or `reject`)")]
pub struct UnknownAction(pub String);

impl FromStr for ApprovalAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

/// JSON body of an approval submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalComments<'a> {
    pub comments: Option<&'a str>,
}

// =============================================================================
// QUERIES
// =============================================================================

/// Filter for `GET /api/options/managers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerQuery {
    pub department_id: Option<i64>,
    pub employee_id: Option<Identifier>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
