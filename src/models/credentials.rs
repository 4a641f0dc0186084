//! Caller-supplied credentials and per-call context

use crate::utils::logging::redact;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Mandatory coordinates for every provider request
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// API key sent in the `apiKey` header
    pub api_key: String,
    /// Provider base URL, e.g. `https://andromeda.example.com/api`
    pub host: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("host", &self.host)
            .finish()
    }
}

/// Ambient deadline and cancellation for a single call
///
/// The client's own timeout still applies; whichever of the timeout,
/// the deadline or the cancellation token fires first aborts the call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl RequestContext {
    /// Context without deadline or cancellation
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the call once `deadline` is reached
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort the call once `timeout` has elapsed from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Abort the call when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(|token| token.is_cancelled())
            .unwrap_or(false)
    }

    /// Resolves when the cancellation token fires; never resolves without one
    pub(crate) async fn cancelled(&self) {
        match &self.cancellation {
            Some(token) => token.cancelled().await,
            None => std::future::pending().await,
        }
    }
}
