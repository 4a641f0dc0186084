//! HTTP transport and shared request executor
//!
//! The [`Transport`] trait performs one raw exchange; the [`Executor`]
//! applies the time budget, honours cancellation and classifies the
//! provider status code.

use super::endpoints::{decode_json, Endpoint};
use super::request::ApiRequest;
use crate::models::{ProviderErrorBody, RequestContext};
use crate::utils::error::{AndromedaError, AndromedaResult};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Header carrying the provider API key
pub const API_KEY_HEADER: &str = "apiKey";

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One HTTP round trip, without status interpretation
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, request: &ApiRequest) -> AndromedaResult<RawResponse>;
}

/// reqwest-backed transport; the inner client pools connections
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with its own HTTP client
    pub fn new(timeout: Duration, user_agent: &str) -> AndromedaResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Wrap an existing client, e.g. one with custom TLS settings
    pub fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn map_error(&self, error: reqwest::Error) -> AndromedaError {
        if error.is_timeout() {
            AndromedaError::Timeout(self.timeout)
        } else {
            AndromedaError::HttpClient(error)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, method: Method, request: &ApiRequest) -> AndromedaResult<RawResponse> {
        let mut builder = self
            .client
            .request(method, request.url().clone())
            .header(API_KEY_HEADER, request.api_key());

        if request.has_json_body() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(request.body().to_vec());
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

/// Shared execution path used by every operation
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request and return the body of a 200 response
    ///
    /// Exactly one attempt is made. The call is bounded by the executor
    /// timeout and the context deadline, whichever is earlier.
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        endpoint: &Endpoint,
        request: ApiRequest,
    ) -> AndromedaResult<Vec<u8>> {
        if ctx.is_cancelled() {
            return Err(AndromedaError::Cancelled);
        }

        let started = Instant::now();
        let budget = started + self.timeout;
        let deadline = ctx.deadline().map_or(budget, |d| d.min(budget));

        debug!(
            endpoint = endpoint.name,
            method = %endpoint.method,
            url = %request.url(),
            "Sending provider request"
        );

        let exchange = tokio::time::timeout_at(
            deadline,
            self.transport.send(endpoint.method.clone(), &request),
        );

        let response = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                warn!(endpoint = endpoint.name, "Provider request cancelled");
                return Err(AndromedaError::Cancelled);
            }
            result = exchange => match result {
                Ok(response) => response?,
                Err(_) => {
                    let waited = deadline.saturating_duration_since(started);
                    warn!(endpoint = endpoint.name, ?waited, "Provider request timed out");
                    return Err(AndromedaError::Timeout(waited));
                }
            },
        };

        classify(endpoint, response)
    }
}

/// Map a provider status to success bytes or a failure
pub fn classify(endpoint: &Endpoint, response: RawResponse) -> AndromedaResult<Vec<u8>> {
    match response.status {
        200 => {
            debug!(endpoint = endpoint.name, bytes = response.body.len(), "Provider request succeeded");
            Ok(response.body)
        }
        400 => {
            let error: ProviderErrorBody = decode_json(&response.body)?;
            warn!(
                endpoint = endpoint.name,
                code = error.sp_result_code,
                "Provider rejected request: {}",
                error.message
            );
            Err(AndromedaError::Provider {
                message: error.message,
                code: error.sp_result_code,
            })
        }
        status => {
            warn!(endpoint = endpoint.name, status, "Provider request failed");
            Err(AndromedaError::RequestFailed { status })
        }
    }
}
