//! Client-side routing: route table, navigation guard, navigation driver.

pub mod guard;
pub mod location;
pub mod navigator;
pub mod route;

pub use guard::{GuardDecision, GuardPolicy, NavigationGuard, authorize};
pub use location::Location;
pub use navigator::{MAX_REDIRECTS, Navigation, NavigationError, Router};
pub use route::{RouteConfigError, RouteDescriptor, RouteTable, View, default_routes};
