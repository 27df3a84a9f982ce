//! Test utilities and mocks for Capstan unit tests.
//!
//! This module is only compiled for tests. It provides a recording mock
//! transport so precondition tests can assert that zero requests were
//! issued, plus filesystem fixtures for manifest and lock files.

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::client::transport::{Transport, TransportError, WireResponse};

// Re-export fixtures for convenience
pub use fixtures::*;

/// One request as seen by the mock transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Full URL the request targeted.
    pub url: String,
    /// Path component of the URL.
    pub path: String,
    /// Form fields, in order.
    pub fields: Vec<(String, String)>,
}

impl RecordedCall {
    /// Look up a form field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Mock transport replaying canned responses and recording every call.
///
/// Clones share state, so a test can hand one clone to the client and
/// keep another for assertions. With an empty queue it answers HTTP 200
/// with an empty body.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    responses: Mutex<VecDeque<Result<WireResponse, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Create a mock with an empty response queue.
    pub fn new() -> Self {
        MockTransport::default()
    }

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: &[u8]) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(WireResponse {
                status,
                body: body.to_vec(),
            }));
    }

    /// Queue a transport-level failure with the given error text.
    pub fn push_error(&self, message: &str) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Number of requests issued through this mock.
    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<WireResponse, TransportError> {
        self.inner.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            path: url.path().to_string(),
            fields: fields.to_vec(),
        });

        match self.inner.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::new(message)),
            None => Ok(WireResponse {
                status: 200,
                body: Vec::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_transport_records_and_replays() {
        let transport = MockTransport::new();
        transport.push_response(404, b"nope");

        let url = Url::parse("https://lock.example.com/generate").unwrap();
        let fields = vec![("requires".to_string(), "{}".to_string())];

        let response = transport.post_form(&url, &fields).unwrap();
        assert_eq!(response.status, 404);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/generate");
        assert_eq!(calls[0].field("requires"), Some("{}"));
        assert!(calls[0].field("missing").is_none());
    }

    #[test]
    fn test_mock_transport_defaults_to_empty_200() {
        let transport = MockTransport::new();
        let url = Url::parse("https://lock.example.com/generate").unwrap();

        let response = transport.post_form(&url, &[]).unwrap();
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }
}
