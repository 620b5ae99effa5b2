//! Client for the leave-management and employee-administration backend.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! App
//!  ├─ services::{auth, leave, approval, employee}  envelope → Result
//!  │    └─ net::LeaveApi                            one method per endpoint
//!  │         └─ net::Transport (HttpTransport)      reqwest + cookie store
//!  ├─ session::SessionStore                         shared, async-locked
//!  └─ router::Router                                route table + guard
//! ```
//! Every backend reply is a `{success, body, errMsg}` envelope. The service
//! layer turns it into `Ok(body)` or a [`services::ServiceError`] whose
//! message is the server's `errMsg` or a fixed localized fallback.

pub mod app;
pub mod config;
pub mod net;
pub mod router;
pub mod services;
pub mod session;
pub mod types;
pub mod util;

pub use app::{App, AppError};
pub use config::ClientConfig;
