//! HTTP transport seam.
//!
//! One trait method, one POST. The production implementation sits on
//! `reqwest::blocking`; tests substitute a recording mock so precondition
//! failures can assert that zero requests went out.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Transport-level failure: connection refused, DNS, TLS, timeout.
///
/// Carries the underlying error text; classification into the client
/// error taxonomy happens in the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError {
            message: err.to_string(),
        }
    }
}

/// A raw HTTP response: status code and body bytes.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The single operation the client needs from HTTP.
pub trait Transport {
    /// POST form-encoded fields to a URL and return the raw response.
    fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<WireResponse, TransportError>;
}

/// Production transport over `reqwest::blocking`.
///
/// Each call builds its own connection; nothing is shared between calls.
/// The exchange is bounded by the connect and total timeouts and never
/// blocks indefinitely.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    connect_timeout: Duration,
    total_timeout: Duration,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, total_timeout: Duration) -> Self {
        HttpTransport {
            connect_timeout,
            total_timeout,
        }
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<WireResponse, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.total_timeout)
            .build()?;

        let response = client.post(url.clone()).form(fields).send()?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(WireResponse { status, body })
    }
}
