//! Andromeda API client
//!
//! One method per provider endpoint, all running through the same
//! validate, build, execute and decode pipeline.

use super::endpoints::Operation;
use super::request::build_request;
use super::transport::{Executor, ReqwestTransport, Transport};
use super::validation::validate;
use crate::config::{Settings, DEFAULT_TIMEOUT_SECS};
use crate::models::*;
use crate::utils::error::AndromedaResult;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Reusable client; cheap to clone and safe to share between tasks
#[derive(Debug, Clone)]
pub struct AndromedaClient {
    executor: Executor,
}

impl AndromedaClient {
    /// Create a client with the default 5 second timeout
    pub fn new() -> AndromedaResult<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> AndromedaResult<Self> {
        let user_agent = format!("andromeda-client/{}", env!("CARGO_PKG_VERSION"));
        let transport = ReqwestTransport::new(timeout, &user_agent)?;
        Ok(Self::with_transport(Arc::new(transport), timeout))
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> AndromedaResult<Self> {
        let timeout = settings.timeout();
        let transport = ReqwestTransport::new(timeout, &settings.client.user_agent)?;
        Ok(Self::with_transport(Arc::new(transport), timeout))
    }

    /// Create a client over any transport implementation
    pub fn with_transport(transport: Arc<dyn Transport>, timeout: Duration) -> Self {
        Self {
            executor: Executor::new(transport, timeout),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.executor.timeout()
    }

    /// Run any operation through the shared pipeline
    pub async fn call<O: Operation>(
        &self,
        ctx: &RequestContext,
        input: &O,
    ) -> AndromedaResult<O::Output> {
        validate(input)?;
        let request = build_request(input)?;
        let body = self.executor.execute(ctx, &O::ENDPOINT, request).await?;
        let output = O::decode(&body)?;

        debug!(endpoint = O::ENDPOINT.name, "Provider response decoded");
        Ok(output)
    }

    /// Site card by identifier (`GET /Sites`)
    pub async fn get_sites(&self, ctx: &RequestContext, input: &GetSitesInput) -> AndromedaResult<Site> {
        self.call(ctx, input).await
    }

    /// Site card by numeric account number (`GET /Sites`)
    pub async fn get_site_by_number(
        &self,
        ctx: &RequestContext,
        input: &GetSiteByNumberInput,
    ) -> AndromedaResult<Site> {
        self.call(ctx, input).await
    }

    /// Responsible persons of a site (`GET /Customers`)
    pub async fn get_customers(
        &self,
        ctx: &RequestContext,
        input: &GetCustomersInput,
    ) -> AndromedaResult<Vec<Customer>> {
        self.call(ctx, input).await
    }

    /// Single responsible person (`GET /Customers`)
    pub async fn get_customer(
        &self,
        ctx: &RequestContext,
        input: &GetCustomerInput,
    ) -> AndromedaResult<Customer> {
        self.call(ctx, input).await
    }

    /// Start a panic-button check (`POST /CheckPanic`)
    pub async fn start_panic_check(
        &self,
        ctx: &RequestContext,
        input: &StartPanicCheckInput,
    ) -> AndromedaResult<CheckPanicStarted> {
        self.call(ctx, input).await
    }

    /// Outcome of a panic-button check (`GET /CheckPanic`)
    pub async fn get_panic_check(
        &self,
        ctx: &RequestContext,
        input: &GetPanicCheckInput,
    ) -> AndromedaResult<CheckPanicResult> {
        self.call(ctx, input).await
    }

    /// MyAlarm users of a site (`GET /MyAlarm`)
    pub async fn get_my_alarm_users(
        &self,
        ctx: &RequestContext,
        input: &GetMyAlarmUsersInput,
    ) -> AndromedaResult<Vec<MyAlarmUser>> {
        self.call(ctx, input).await
    }

    /// Change a MyAlarm user's role (`PUT /MyAlarm`)
    pub async fn change_user_role(
        &self,
        ctx: &RequestContext,
        input: &ChangeUserRoleInput,
    ) -> AndromedaResult<MessageResponse> {
        self.call(ctx, input).await
    }

    /// Allow or forbid panic-button use (`PUT /MyAlarm`)
    ///
    /// An empty response body yields an empty [`MessageResponse`].
    pub async fn change_panic_permission(
        &self,
        ctx: &RequestContext,
        input: &ChangePanicPermissionInput,
    ) -> AndromedaResult<MessageResponse> {
        self.call(ctx, input).await
    }

    /// Sites linked to a MyAlarm phone (`GET /MyAlarm/UserObjects`, JSON body)
    pub async fn get_user_objects(
        &self,
        ctx: &RequestContext,
        input: &GetUserObjectsInput,
    ) -> AndromedaResult<Vec<UserObject>> {
        self.call(ctx, input).await
    }

    /// Partitions of a site (`GET /Parts`)
    pub async fn get_partitions(
        &self,
        ctx: &RequestContext,
        input: &GetPartitionsInput,
    ) -> AndromedaResult<Vec<Partition>> {
        self.call(ctx, input).await
    }

    /// Zones of a site (`GET /Zones`)
    pub async fn get_zones(&self, ctx: &RequestContext, input: &GetZonesInput) -> AndromedaResult<Vec<Zone>> {
        self.call(ctx, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AndromedaClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_client_from_settings() {
        let mut settings = Settings::default();
        settings.client.timeout = 12;
        let client = AndromedaClient::from_settings(&settings).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(12));
    }
}
