//! Network layer: transport seam, endpoint registry and API wrappers.
//!
//! ARCHITECTURE
//! ============
//! `api` → `transport::Transport` → backend. `http::HttpTransport` is the
//! production transport; tests use `test_helpers::MockTransport`.

pub mod api;
pub mod endpoints;
pub mod envelope;
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::LeaveApi;
pub use envelope::{Envelope, Rejection};
pub use transport::{ApiRequest, Method, RequestBody, Transport, TransportError};
