//! Recording transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::api::LeaveApi;
use super::envelope::Envelope;
use super::transport::{ApiRequest, Transport, TransportError};

enum Reply {
    Envelope(Envelope),
    Unreachable,
}

/// Records every request and replays queued replies in order.
/// An empty queue answers with a successful envelope around `null`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, body: Value) {
        self.push(Reply::Envelope(Envelope::ok(body)));
    }

    pub fn push_failure(&self, err_msg: Option<&str>) {
        self.push(Reply::Envelope(Envelope::failure(err_msg)));
    }

    /// Next call fails below the envelope, like a refused connection.
    pub fn push_unreachable(&self) {
        self.push(Reply::Unreachable);
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Envelope(envelope)) => Ok(envelope),
            Some(Reply::Unreachable) => Err(TransportError::Request("connection refused".into())),
            None => Ok(Envelope::ok(Value::Null)),
        }
    }
}

pub fn api_for(mock: &Arc<MockTransport>) -> LeaveApi {
    LeaveApi::new(mock.clone())
}
