//! Route table: typed descriptors validated once at construction.
//!
//! DESIGN
//! ======
//! Required roles live on the descriptor as a typed set instead of loose
//! per-route metadata. Everything the guard may redirect to has to exist
//! when the table is built, so a bad table fails at startup rather than on
//! some later navigation.

use std::collections::{BTreeSet, HashMap};

pub const ROOT_ROUTE: &str = "root";
pub const DASHBOARD_ROUTE: &str = "dashboard";
pub const LOGIN_ROUTE: &str = "login";
pub const ACCESS_DENIED_ROUTE: &str = "accessDenied";
pub const NOT_FOUND_ROUTE: &str = "notfound";
pub const ERROR_ROUTE: &str = "error";

/// Routes the guard and navigator may redirect to.
pub const REQUIRED_ROUTES: [&str; 3] = [LOGIN_ROUTE, ACCESS_DENIED_ROUTE, NOT_FOUND_ROUTE];

/// Reachable without a session under the revalidating guard.
const PUBLIC_ROUTES: [&str; 4] = [LOGIN_ROUTE, ERROR_ROUTE, NOT_FOUND_ROUTE, ACCESS_DENIED_ROUTE];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("route `{name}` has invalid path `{path}`: must start with '/'")]
    InvalidPath { name: String, path: String },
    #[error("route with path `{0}` has an empty name")]
    EmptyName(String),
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),
    #[error("route `{0}` lists a blank required role")]
    BlankRole(String),
    #[error("route `{name}` redirects to unknown path `{target}`")]
    DanglingRedirect { name: String, target: String },
    #[error("route `{name}` redirects to `{target}`, which redirects again")]
    ChainedRedirect { name: String, target: String },
    #[error("route table is missing required route `{0}`")]
    MissingRoute(&'static str),
}

/// Page a route renders. Rendering itself is the UI's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Layout,
    Dashboard,
    EmployeeManagement,
    LeaveRequest,
    LeaveApproval,
    Empty,
    Landing,
    NotFound,
    Login,
    AccessDenied,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub view: View,
    pub title: Option<String>,
    /// Empty means public.
    pub required_roles: BTreeSet<String>,
    /// Path this route forwards to instead of rendering.
    pub redirect: Option<String>,
}

impl RouteDescriptor {
    #[must_use]
    pub fn new(path: &str, name: &str, view: View) -> Self {
        Self {
            path: path.to_owned(),
            name: name.to_owned(),
            view,
            title: None,
            required_roles: BTreeSet::new(),
            redirect: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    #[must_use]
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.required_roles = roles.iter().map(|r| (*r).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn redirect_to(mut self, path: &str) -> Self {
        self.redirect = Some(path.to_owned());
        self
    }

    #[must_use]
    pub fn is_role_gated(&self) -> bool {
        !self.required_roles.is_empty()
    }
}

/// The application's routes.
#[must_use]
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/", ROOT_ROUTE, View::Layout).redirect_to("/auth/login"),
        RouteDescriptor::new("/dashboard", DASHBOARD_ROUTE, View::Dashboard).title("儀表板"),
        RouteDescriptor::new("/pages/employeemanagement", "employeeManagement", View::EmployeeManagement)
            .title("員工列表")
            .roles(&["HR", "ADMIN"]),
        RouteDescriptor::new("/pages/leaverequest", "leaveRequest", View::LeaveRequest).title("請假申請/紀錄"),
        RouteDescriptor::new("/pages/leaveapproval", "leaveApproval", View::LeaveApproval)
            .title("請假審核")
            .roles(&["MANAGER", "ADMIN"]),
        RouteDescriptor::new("/pages/empty", "empty", View::Empty),
        RouteDescriptor::new("/landing", "landing", View::Landing),
        RouteDescriptor::new("/pages/notfound", NOT_FOUND_ROUTE, View::NotFound),
        RouteDescriptor::new("/auth/login", LOGIN_ROUTE, View::Login),
        RouteDescriptor::new("/auth/access", ACCESS_DENIED_ROUTE, View::AccessDenied),
        RouteDescriptor::new("/auth/error", ERROR_ROUTE, View::Error),
    ]
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Validate and index `routes`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteConfigError`] found.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteConfigError> {
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            if route.name.trim().is_empty() {
                return Err(RouteConfigError::EmptyName(route.path.clone()));
            }
            if !route.path.starts_with('/') {
                return Err(RouteConfigError::InvalidPath { name: route.name.clone(), path: route.path.clone() });
            }
            if route.required_roles.iter().any(|r| r.trim().is_empty()) {
                return Err(RouteConfigError::BlankRole(route.name.clone()));
            }
            if by_name.insert(route.name.clone(), idx).is_some() {
                return Err(RouteConfigError::DuplicateName(route.name.clone()));
            }
            if by_path.insert(route.path.clone(), idx).is_some() {
                return Err(RouteConfigError::DuplicatePath(route.path.clone()));
            }
        }

        for route in &routes {
            let Some(target) = &route.redirect else { continue };
            let Some(&idx) = by_path.get(target) else {
                return Err(RouteConfigError::DanglingRedirect { name: route.name.clone(), target: target.clone() });
            };
            if routes[idx].redirect.is_some() {
                return Err(RouteConfigError::ChainedRedirect { name: route.name.clone(), target: target.clone() });
            }
        }

        for required in REQUIRED_ROUTES {
            if !by_name.contains_key(required) {
                return Err(RouteConfigError::MissingRoute(required));
            }
        }

        Ok(Self { routes, by_path, by_name })
    }

    /// Table built from [`default_routes`].
    ///
    /// # Errors
    ///
    /// Only if the built-in table is itself inconsistent.
    pub fn standard() -> Result<Self, RouteConfigError> {
        Self::new(default_routes())
    }

    #[must_use]
    pub fn by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.by_path.get(path).map(|&idx| &self.routes[idx])
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Paths reachable without a session under the revalidating guard.
    #[must_use]
    pub fn public_paths(&self) -> BTreeSet<String> {
        PUBLIC_ROUTES
            .iter()
            .filter_map(|name| self.by_name(name))
            .map(|route| route.path.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
