//! Login, logout and identity lookup, kept in step with the session store.

use serde_json::Value;

use super::{ServiceError, resolve};
use crate::net::LeaveApi;
use crate::session::SessionStore;
use crate::types::UserProfile;

const LOGIN_FAILED: &str = "登入失敗";
const LOGOUT_FAILED: &str = "登出失敗";
const USER_INFO_FAILED: &str = "取得使用者資訊失敗";

#[derive(Clone)]
pub struct AuthService {
    api: LeaveApi,
    session: SessionStore,
}

impl AuthService {
    #[must_use]
    pub fn new(api: LeaveApi, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Submit credentials; on success the returned identity becomes the session.
    pub async fn login(&self, emp_id: &str, password: &str) -> Result<UserProfile, ServiceError> {
        let envelope = self.api.login(emp_id, password).await?;
        let user: UserProfile = resolve(envelope, LOGIN_FAILED)?;
        tracing::info!(emp_id, "logged in");
        self.session.set_session(user.clone()).await;
        Ok(user)
    }

    /// End the backend session. The local session is cleared whatever the
    /// outcome, so a failed logout never leaves the client looking signed in.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        let result = match self.api.logout().await {
            Ok(envelope) => resolve::<Value>(envelope, LOGOUT_FAILED).map(|_| ()),
            Err(e) => Err(e.into()),
        };
        self.session.clear_session().await;
        tracing::info!(ok = result.is_ok(), "logged out");
        result
    }

    /// Fresh identity lookup, bypassing the session cache.
    pub async fn current_user(&self) -> Result<UserProfile, ServiceError> {
        let envelope = self.api.user_info().await?;
        resolve(envelope, USER_INFO_FAILED)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
