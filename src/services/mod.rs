//! Per-domain services over the API layer.
//!
//! ARCHITECTURE
//! ============
//! Each service method awaits exactly one API call and converts its
//! envelope into `Ok(body)` or [`ServiceError::Rejected`] carrying the
//! server message, or the operation's fixed localized fallback when the
//! server sent none. Transport failures pass through unchanged.

pub mod approval;
pub mod auth;
pub mod employee;
pub mod leave;

use serde::de::DeserializeOwned;

use crate::net::{Envelope, TransportError};

pub use approval::ApprovalService;
pub use auth::AuthService;
pub use employee::EmployeeService;
pub use leave::LeaveApplicationService;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The backend answered `success: false`. Displays the bare message.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body of a successful envelope had an unexpected shape.
    #[error("response body decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Unwrap an envelope into a typed body, or the rejection with `fallback`.
pub(crate) fn resolve<T: DeserializeOwned>(envelope: Envelope, fallback: &str) -> Result<T, ServiceError> {
    let body = envelope
        .into_result()
        .map_err(|rejection| ServiceError::Rejected(rejection.message_or(fallback)))?;
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
