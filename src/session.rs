//! Client-held session: who is signed in and which roles they carry.
//!
//! DESIGN
//! ======
//! `Session` is a plain value with two pure transitions, `signed_in` and
//! `cleared`. `SessionStore` is the one owned, shareable instance per
//! application; it is handed to the router guard and the auth service
//! rather than reached through a global.
//!
//! `is_initialized` latches after the first identity resolution, success or
//! failure, so a page that already knows it has no session does not ask the
//! backend again on every navigation. Only a fresh store resets it.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::net::LeaveApi;
use crate::services::resolve;
use crate::types::{Identifier, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub id: Option<Identifier>,
    pub name: String,
    pub roles: BTreeSet<String>,
    pub is_logged_in: bool,
    pub is_initialized: bool,
}

impl Session {
    /// Session adopting `user` as the signed-in identity.
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            id: user.id,
            name: user.name.unwrap_or_default(),
            roles: user.roles.unwrap_or_default().into_iter().collect(),
            is_logged_in: true,
            is_initialized: true,
        }
    }

    /// Resolved, signed-out session.
    #[must_use]
    pub fn cleared() -> Self {
        Self { is_initialized: true, ..Self::default() }
    }

    /// True when at least one of `required` is held. An empty `required`
    /// set never matches; callers treat that case as public.
    #[must_use]
    pub fn has_any_role(&self, required: &BTreeSet<String>) -> bool {
        !self.roles.is_disjoint(required)
    }
}

/// Shared handle to the application's single session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn is_initialized(&self) -> bool {
        self.state.read().await.is_initialized
    }

    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.is_logged_in
    }

    /// Adopt `user` after an explicit login.
    pub async fn set_session(&self, user: UserProfile) {
        *self.state.write().await = Session::signed_in(user);
    }

    /// Drop the identity. The store stays initialized.
    pub async fn clear_session(&self) {
        *self.state.write().await = Session::cleared();
    }

    /// Resolve the session from the backend once per store lifetime.
    ///
    /// No-op when already initialized. Any failure, business or transport,
    /// leaves a cleared session instead of an error. Two callers racing an
    /// uninitialized store may both fetch; the later write wins.
    pub async fn initialize_session(&self, api: &LeaveApi) {
        if self.is_initialized().await {
            return;
        }

        let resolved = match api.user_info().await {
            Ok(envelope) => resolve::<UserProfile>(envelope, "").map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match resolved {
            Ok(user) => {
                tracing::info!(id = ?user.id, "session restored");
                self.set_session(user).await;
            }
            Err(reason) => {
                tracing::warn!(%reason, "session initialization failed; continuing signed out");
                self.clear_session().await;
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
