//! Application composition root.
//!
//! DESIGN
//! ======
//! `App` is built once per application instance. It owns the one
//! [`SessionStore`] and hands clones of it to the auth service and the
//! router guard, so a logout through [`AuthService`] is immediately visible
//! to the next navigation. Every service shares the same [`LeaveApi`] and
//! therefore the same transport and cookie jar.

use std::sync::Arc;

use crate::config::{ClientConfig, ConfigError};
use crate::net::http::HttpTransport;
use crate::net::{LeaveApi, Transport, TransportError};
use crate::router::{RouteConfigError, RouteTable, Router};
use crate::services::{ApprovalService, AuthService, EmployeeService, LeaveApplicationService};
use crate::session::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteConfigError),
}

// =============================================================================
// APP
// =============================================================================

pub struct App {
    pub config: ClientConfig,
    pub api: LeaveApi,
    pub session: SessionStore,
    pub auth: AuthService,
    pub leave: LeaveApplicationService,
    pub approval: ApprovalService,
    pub employee: EmployeeService,
    pub router: Router,
}

impl App {
    /// Build with the `reqwest` transport described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the HTTP client or route table cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(base_url = %transport.base_url(), policy = %config.guard_policy, "app configured");
        Self::with_transport(config, Arc::new(transport))
    }

    /// Build over an arbitrary transport with the standard route table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Routes`] if the built-in route table is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, AppError> {
        Ok(Self::with_routes(config, transport, RouteTable::standard()?))
    }

    /// Build over `transport` with a caller-supplied route table.
    #[must_use]
    pub fn with_routes(config: ClientConfig, transport: Arc<dyn Transport>, table: RouteTable) -> Self {
        let api = LeaveApi::new(transport);
        let session = SessionStore::new();
        let router = Router::new(table, config.guard_policy, session.clone(), api.clone());
        Self {
            auth: AuthService::new(api.clone(), session.clone()),
            leave: LeaveApplicationService::new(api.clone()),
            approval: ApprovalService::new(api.clone()),
            employee: EmployeeService::new(api.clone()),
            router,
            session,
            api,
            config,
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
