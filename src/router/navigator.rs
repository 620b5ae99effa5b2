//! Navigation driver: resolve, guard, redirect, commit.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! navigate(raw)
//!   └─ Location::parse
//!        └─ resolve()  ── route redirect? ──► target route (one hop, validated)
//!             │        ── unknown path?   ──► notfound route
//!             └─ guard.check()
//!                  ├─ Proceed          ──► commit to current + history
//!                  ├─ RedirectToLogin  ──► /auth/login?redirect=<full path>, loop
//!                  └─ AccessDenied     ──► access-denied route, loop
//! ```
//! Guard redirects re-enter the loop so the target page is guarded too. The
//! loop gives up after [`MAX_REDIRECTS`] hops.

use super::guard::{GuardDecision, GuardPolicy, NavigationGuard};
use super::location::Location;
use super::route::{ACCESS_DENIED_ROUTE, DASHBOARD_ROUTE, LOGIN_ROUTE, NOT_FOUND_ROUTE, RouteDescriptor, RouteTable, View};
use crate::net::LeaveApi;
use crate::session::SessionStore;

/// Guard redirects followed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 5;

/// Query parameter carrying the originally requested path to the login page.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("navigation to `{location}` exceeded {MAX_REDIRECTS} redirects")]
    RedirectLoop { location: String },
    #[error("no route named `{0}`")]
    UnknownRoute(String),
}

/// A committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: RouteDescriptor,
    pub location: Location,
    /// Full path originally requested, when the guard sent the user elsewhere.
    pub redirected_from: Option<String>,
}

pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    current: Option<Navigation>,
    history: Vec<Location>,
}

impl Router {
    #[must_use]
    pub fn new(table: RouteTable, policy: GuardPolicy, session: SessionStore, api: LeaveApi) -> Self {
        let guard = NavigationGuard::new(policy, session, api, table.public_paths());
        Self { table, guard, current: None, history: Vec::new() }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    #[must_use]
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Committed locations, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Location] {
        &self.history
    }

    /// Navigate to `raw` (`path?query`, optionally `#`-prefixed).
    ///
    /// # Errors
    ///
    /// [`NavigationError::RedirectLoop`] when guard redirects do not settle.
    pub async fn navigate(&mut self, raw: &str) -> Result<Navigation, NavigationError> {
        let requested = Location::parse(raw);
        let mut location = requested.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let (route, resolved) = self.resolve(location);
            location = resolved;

            match self.guard.check(&route, &location).await {
                GuardDecision::Proceed => {
                    let nav = Navigation { route, location, redirected_from };
                    tracing::info!(route = %nav.route.name, path = %nav.location.full_path(), "navigated");
                    self.history.push(nav.location.clone());
                    self.current = Some(nav.clone());
                    return Ok(nav);
                }
                GuardDecision::RedirectToLogin { redirect } => {
                    redirected_from.get_or_insert_with(|| location.full_path());
                    location = self.named_location(LOGIN_ROUTE).with_query(REDIRECT_PARAM, &redirect);
                }
                GuardDecision::AccessDenied => {
                    redirected_from.get_or_insert_with(|| location.full_path());
                    location = self.named_location(ACCESS_DENIED_ROUTE);
                }
            }
        }

        tracing::warn!(location = %requested.full_path(), "redirect loop");
        Err(NavigationError::RedirectLoop { location: requested.full_path() })
    }

    /// Navigate to the route registered as `name`.
    ///
    /// # Errors
    ///
    /// [`NavigationError::UnknownRoute`] or anything [`Router::navigate`] returns.
    pub async fn navigate_to_name(&mut self, name: &str) -> Result<Navigation, NavigationError> {
        let location = self.resolve_name(name)?;
        self.navigate(&location.full_path()).await
    }

    /// Location of the route registered as `name`.
    ///
    /// # Errors
    ///
    /// [`NavigationError::UnknownRoute`] if no such route exists.
    pub fn resolve_name(&self, name: &str) -> Result<Location, NavigationError> {
        self.table
            .by_name(name)
            .map(|route| Location::new(&route.path))
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_owned()))
    }

    /// Where to go after a successful login: the current location's
    /// `redirect` parameter if it names an in-app path, else the dashboard.
    #[must_use]
    pub fn post_login_location(&self) -> Location {
        let requested = self
            .current
            .as_ref()
            .and_then(|nav| nav.location.query_value(REDIRECT_PARAM))
            .filter(|target| is_internal_path(target));
        match requested {
            Some(target) => Location::parse(target),
            None => self.named_location(DASHBOARD_ROUTE),
        }
    }

    /// Route for `location`, following a route-level redirect. Unknown paths
    /// map to the not-found route while keeping the requested location.
    fn resolve(&self, location: Location) -> (RouteDescriptor, Location) {
        let Some(route) = self.table.by_path(&location.path) else {
            return (self.required(NOT_FOUND_ROUTE), location);
        };
        let Some(target) = &route.redirect else {
            return (route.clone(), location);
        };
        let forwarded = Location { path: target.clone(), query: location.query };
        match self.table.by_path(target) {
            Some(next) => (next.clone(), forwarded),
            None => (self.required(NOT_FOUND_ROUTE), forwarded),
        }
    }

    fn named_location(&self, name: &str) -> Location {
        self.table
            .by_name(name)
            .map_or_else(|| Location::new("/"), |route| Location::new(&route.path))
    }

    /// One of the routes `RouteTable::new` guarantees.
    fn required(&self, name: &str) -> RouteDescriptor {
        self.table
            .by_name(name)
            .cloned()
            .unwrap_or_else(|| RouteDescriptor::new("/", name, View::NotFound))
    }
}

/// Absolute in-app path; rejects protocol-relative `//host` targets.
fn is_internal_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;
