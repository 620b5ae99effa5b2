//! Response envelope returned by every backend call.
//!
//! DESIGN
//! ======
//! The backend wraps each payload as `{ success, body, errMsg }`. Callers
//! never branch on `success` directly; `Envelope::into_result` turns it
//! into a tagged `Result` so a failed envelope can't leak its `body`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw `{ success, body, errMsg }` wrapper as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub err_msg: Option<String>,
}

/// Business-level failure carried by an envelope with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: Option<String>,
}

impl Rejection {
    /// Server message, or `fallback` when the server sent none (or an empty one).
    #[must_use]
    pub fn message_or(self, fallback: &str) -> String {
        match self.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => fallback.to_owned(),
        }
    }
}

impl Envelope {
    /// Successful envelope around `body`.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self { success: true, body, err_msg: None }
    }

    /// Failed envelope with an optional server message.
    #[must_use]
    pub fn failure(err_msg: Option<&str>) -> Self {
        Self { success: false, body: Value::Null, err_msg: err_msg.map(str::to_owned) }
    }

    /// Split into the authoritative body or the rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when `success` is false.
    pub fn into_result(self) -> Result<Value, Rejection> {
        if self.success {
            Ok(self.body)
        } else {
            Err(Rejection { message: self.err_msg })
        }
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
