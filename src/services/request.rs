//! Request descriptor construction
//!
//! Pure translation of a validated input into URL, body and API key.

use super::endpoints::Operation;
use crate::utils::error::{AndromedaResult, ErrorContext};
use crate::utils::logging::redact;
use reqwest::Url;
use std::fmt;

/// Query parameter carrying the acting username
pub const USER_NAME_PARAM: &str = "userName";

/// Everything needed to send one provider request
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    url: Url,
    body: Vec<u8>,
    api_key: String,
}

impl ApiRequest {
    pub fn new(url: Url, body: Vec<u8>, api_key: impl Into<String>) -> Self {
        Self {
            url,
            body,
            api_key: api_key.into(),
        }
    }

    /// Target URL including encoded query parameters
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request body, empty for query-only endpoints
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether the body is JSON and needs a content type
    pub fn has_json_body(&self) -> bool {
        !self.body.is_empty()
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("url", &self.url.as_str())
            .field("body_len", &self.body.len())
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

/// Join host and endpoint path, then append query parameters in order
pub fn build_url(host: &str, path: &str, query: &[(&str, String)]) -> AndromedaResult<Url> {
    let base = format!("{}{}", host.trim_end_matches('/'), path);
    let mut url = Url::parse(&base).internal_context("Failed to parse request URL")?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}

/// Build the request descriptor for an already validated input
pub fn build_request<O: Operation>(input: &O) -> AndromedaResult<ApiRequest> {
    let mut query = input.query();
    if let Some(user_name) = input.user_name() {
        query.push((USER_NAME_PARAM, user_name.to_string()));
    }

    let credentials = input.credentials();
    let url = build_url(&credentials.host, O::ENDPOINT.path, &query)?;
    let body = input.body()?.unwrap_or_default();

    Ok(ApiRequest::new(url, body, credentials.api_key.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn credentials() -> Credentials {
        Credentials::new("secret-key", "https://andromeda.example.com/api/")
    }

    #[test]
    fn test_build_url_encodes_query() {
        let url = build_url(
            "https://andromeda.example.com",
            "/Sites",
            &[("id", "a b&c".to_string())],
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://andromeda.example.com/Sites?id=a+b%26c");
    }

    #[test]
    fn test_build_url_without_query() {
        let url = build_url("https://andromeda.example.com/", "/MyAlarm/UserObjects", &[]).unwrap();
        assert_eq!(url.as_str(), "https://andromeda.example.com/MyAlarm/UserObjects");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_user_name_appended_when_present() {
        let input = GetCustomersInput::new(credentials(), "site-7").with_user_name("operator 1");
        let request = build_request(&input).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://andromeda.example.com/api/Customers?siteId=site-7&userName=operator+1"
        );
        assert!(request.body().is_empty());
        assert!(!request.has_json_body());
        assert_eq!(request.api_key(), "secret-key");
    }

    #[test]
    fn test_user_name_omitted_when_empty() {
        let input = GetPartitionsInput::new(credentials(), "site-7").with_user_name("");
        let request = build_request(&input).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://andromeda.example.com/api/Parts?siteId=site-7"
        );
    }

    #[test]
    fn test_json_body_request() {
        let input = GetUserObjectsInput::new(credentials(), "+79991234567").with_user_name("op");
        let request = build_request(&input).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://andromeda.example.com/api/MyAlarm/UserObjects?userName=op"
        );
        assert!(request.has_json_body());
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, serde_json::json!({"Phone": "+79991234567"}));
    }

    #[test]
    fn test_legacy_site_lookup_uses_number() {
        let input = GetSiteByNumberInput::new(credentials(), 1024);
        let request = build_request(&input).unwrap();
        assert_eq!(request.url().query(), Some("id=1024"));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let input = GetZonesInput::new(credentials(), "site");
        let request = build_request(&input).unwrap();
        assert!(!format!("{:?}", request).contains("secret-key"));
    }
}
