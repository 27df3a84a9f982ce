//! Optional host integration.
//!
//! Capstan can run embedded in a larger application that decides whether
//! the remote service may be used, overrides the server URL, and collects
//! diagnostic records. That application is modeled as a capability trait
//! with a no-op default, injected at construction time.

/// What went wrong, for the host's diagnostic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDetail<'a> {
    /// Transport-level error text.
    Error(&'a str),
    /// HTTP status code of a non-200 response.
    Status(u16),
}

/// A diagnostic record emitted on failure paths only.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub message: &'a str,
    pub url: &'a str,
    pub detail: LogDetail<'a>,
}

/// Host capability interface.
pub trait Host {
    /// Whether the remote service may be called. Defaults to enabled.
    fn is_enabled(&self) -> bool {
        true
    }

    /// An alternate base URL, taking precedence over the client config.
    fn base_url_override(&self) -> Option<String> {
        None
    }

    /// Receive a diagnostic record. Write-only; the result of the
    /// operation is unaffected.
    fn log(&self, _record: &LogRecord<'_>) {}
}

/// Default host: service enabled, no URL override, diagnostics dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl Host for NoopHost {}
