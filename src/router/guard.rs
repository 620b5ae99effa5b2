//! Pre-navigation guard.
//!
//! DESIGN
//! ======
//! Two policies exist and exactly one is active per guard:
//!
//! - `Cached` resolves the session once (see
//!   [`SessionStore::initialize_session`]) and answers every later
//!   navigation from memory. Role-gated routes check the cached role set.
//!   Logout invalidates the cache by clearing the session.
//! - `Revalidate` lets a fixed allowlist of public paths through and asks the
//!   backend for the current user on every other navigation. It does not
//!   look at roles.
//!
//! The role check itself is the pure [`authorize`] so it can be exercised
//! without a backend.

use std::collections::BTreeSet;

use super::location::Location;
use super::route::RouteDescriptor;
use crate::net::LeaveApi;
use crate::session::{Session, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// Resolve identity once, then decide from the cached session.
    #[default]
    Cached,
    /// Re-fetch identity on every navigation to a non-public path.
    Revalidate,
}

impl GuardPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Revalidate => "revalidate",
        }
    }
}

impl std::fmt::Display for GuardPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Send the user to login; `redirect` is the full path they asked for.
    RedirectToLogin { redirect: String },
    AccessDenied,
}

/// Role decision against an already-resolved session.
#[must_use]
pub fn authorize(session: &Session, required_roles: &BTreeSet<String>, full_path: &str) -> GuardDecision {
    if required_roles.is_empty() {
        return GuardDecision::Proceed;
    }
    if !session.is_logged_in {
        return GuardDecision::RedirectToLogin { redirect: full_path.to_owned() };
    }
    if session.has_any_role(required_roles) {
        GuardDecision::Proceed
    } else {
        GuardDecision::AccessDenied
    }
}

pub struct NavigationGuard {
    policy: GuardPolicy,
    session: SessionStore,
    api: LeaveApi,
    public_paths: BTreeSet<String>,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(policy: GuardPolicy, session: SessionStore, api: LeaveApi, public_paths: BTreeSet<String>) -> Self {
        Self { policy, session, api, public_paths }
    }

    #[must_use]
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Decide whether navigating to `route` at `location` may proceed.
    pub async fn check(&self, route: &RouteDescriptor, location: &Location) -> GuardDecision {
        let decision = match self.policy {
            GuardPolicy::Cached => self.check_cached(route, location).await,
            GuardPolicy::Revalidate => self.check_revalidate(location).await,
        };
        tracing::debug!(
            policy = %self.policy,
            route = %route.name,
            path = %location.path,
            ?decision,
            "guard decision"
        );
        decision
    }

    async fn check_cached(&self, route: &RouteDescriptor, location: &Location) -> GuardDecision {
        self.session.initialize_session(&self.api).await;
        let session = self.session.snapshot().await;
        authorize(&session, &route.required_roles, &location.full_path())
    }

    async fn check_revalidate(&self, location: &Location) -> GuardDecision {
        if self.public_paths.contains(&location.path) {
            return GuardDecision::Proceed;
        }
        let redirect = GuardDecision::RedirectToLogin { redirect: location.full_path() };
        match self.api.user_info().await {
            Ok(envelope) => match envelope.into_result() {
                Ok(_) => GuardDecision::Proceed,
                Err(rejection) => {
                    tracing::info!(path = %location.path, reason = %rejection.message_or(""), "identity check rejected");
                    redirect
                }
            },
            Err(e) => {
                tracing::warn!(path = %location.path, error = %e, "identity check failed");
                redirect
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
