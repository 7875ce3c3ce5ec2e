//
//  topgg
//  api/pipeline.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Pipeline
//!
//! Builds authenticated requests for both Top.gg API generations, hands them
//! to the [`Transport`], classifies the response and decodes the body.
//!
//! ## Flow
//!
//! 1. Fail with [`Error::Cancelled`] if the token is already cancelled
//! 2. Resolve the URL for the request's [`ApiVersion`] and attach the
//!    matching `Authorization` header
//! 3. Race the exchange against the cancellation token
//! 4. Classify the response using the fully read body
//! 5. Decode the body with case-insensitive field matching
//!
//! The pipeline never retries. A rate-limit or transport failure is returned
//! once and the caller decides what to do with it.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::common::{case_insensitive, classify_response, ApiError};
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::auth::{AuthScheme, Credential};
use crate::error::{Error, Result};

/// Default base URL of the legacy API. The current API lives under `/v1`.
pub const DEFAULT_BASE_URL: &str = "https://top.gg/api";

/// The Top.gg API generation an operation belongs to.
///
/// # Variants
///
/// * `Legacy` - `https://top.gg/api`, raw token authorization
/// * `Current` - `https://top.gg/api/v1`, bearer token authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    Legacy,
    Current,
}

impl ApiVersion {
    /// Returns the `Authorization` header shape this generation expects.
    pub fn auth_scheme(self) -> AuthScheme {
        match self {
            Self::Legacy => AuthScheme::Raw,
            Self::Current => AuthScheme::Bearer,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Current => write!(f, "v1"),
        }
    }
}

/// Base URLs of both API generations.
///
/// # Example
///
/// ```rust
/// use topgg::api::{ApiVersion, Endpoints};
///
/// let endpoints = Endpoints::new("https://top.gg/api/").unwrap();
/// assert_eq!(endpoints.base_url(ApiVersion::Legacy), "https://top.gg/api");
/// assert_eq!(endpoints.base_url(ApiVersion::Current), "https://top.gg/api/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    legacy: String,
    current: String,
}

impl Endpoints {
    /// Derives both generations from the legacy base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self> {
        Url::parse(base)?;
        let legacy = base.trim_end_matches('/').to_string();
        let current = format!("{legacy}/v1");
        Ok(Self { legacy, current })
    }

    /// Returns the base URL for `version`, without a trailing slash.
    pub fn base_url(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::Legacy => &self.legacy,
            ApiVersion::Current => &self.current,
        }
    }

    /// Builds the absolute URL for `path`, appending `query` when non-empty.
    pub fn url(&self, version: ApiVersion, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url(version), path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            legacy: DEFAULT_BASE_URL.to_string(),
            current: format!("{DEFAULT_BASE_URL}/v1"),
        }
    }
}

/// One operation's request before authentication and URL resolution.
///
/// # Example
///
/// ```rust
/// use topgg::api::{ApiRequest, ApiVersion};
///
/// let request = ApiRequest::get(ApiVersion::Legacy, "/bots")
///     .query("limit", 5)
///     .query("sort", "-points");
/// assert_eq!(request.path(), "/bots");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    version: ApiVersion,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, version: ApiVersion, path: impl Into<String>) -> Self {
        Self {
            method,
            version,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(Method::GET, version, path)
    }

    pub fn post(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(Method::POST, version, path)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Appends every pair in `pairs`.
    pub fn queries(mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_string(body).map_err(Error::Serialization)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }
}

/// Sends [`ApiRequest`]s and turns the responses into typed results.
///
/// Holds only immutable state, so concurrent calls on the same pipeline do
/// not coordinate with each other.
pub struct RequestPipeline {
    transport: Arc<dyn Transport>,
    credential: Credential,
    endpoints: Endpoints,
}

impl RequestPipeline {
    pub fn new(transport: Arc<dyn Transport>, credential: Credential, endpoints: Endpoints) -> Self {
        Self {
            transport,
            credential,
            endpoints,
        }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sends `request` and decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::Cancelled`] if `cancel` fires before the exchange completes
    /// - [`Error::Api`] with a classified failure for non-2xx responses
    /// - [`Error::Api`] with [`ApiError::Deserialization`] if the body does
    ///   not match `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<T> {
        let response = self.dispatch(request, cancel).await?;
        decode(&response.body)
    }

    /// Sends `request` and discards the response body.
    pub async fn execute_unit(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<()> {
        self.dispatch(request, cancel).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<HttpResponse> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let url = self.endpoints.url(request.version, &request.path, &request.query)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            self.credential.header_value(request.version.auth_scheme()),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if request.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        debug!(
            method = %request.method,
            api = %request.version,
            path = url.path(),
            "Sending Top.gg request"
        );

        let http_request = HttpRequest {
            method: request.method,
            url,
            headers,
            body: request.body,
        };

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Top.gg request cancelled");
                return Err(Error::Cancelled);
            }
            result = self.transport.send(http_request) => result.map_err(ApiError::from)?,
        };

        debug!(status = response.status.as_u16(), "Received Top.gg response");

        if let Some(failure) = classify_response(response.status, &response.headers, &response.body) {
            if let ApiError::RateLimited { retry_after, .. } = &failure {
                warn!(
                    retry_after_secs = retry_after.map(|d| d.as_secs()),
                    "Top.gg rate limit exceeded"
                );
            }
            return Err(failure.into());
        }

        Ok(response)
    }
}

/// Decodes a successful response body, keeping the raw body on failure.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    case_insensitive::from_str(body).map_err(|e| {
        Error::Api(ApiError::Deserialization {
            message: e.to_string(),
            body: body.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::fake::{HangingTransport, RecordingTransport, UnreachableTransport};
    use serde::Deserialize;
    use std::time::Duration;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Count {
        server_count: u64,
    }

    #[derive(Serialize)]
    struct Body {
        server_count: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        shard_id: Option<u32>,
    }

    fn pipeline(transport: Arc<dyn Transport>) -> RequestPipeline {
        RequestPipeline::new(
            transport,
            Credential::new("secret-token").unwrap(),
            Endpoints::new("http://localhost/api").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_legacy_uses_raw_token() {
        let transport = Arc::new(RecordingTransport::new(200, r#"{"server_count": 3}"#));
        let pipeline = pipeline(transport.clone());

        let count: Count = pipeline
            .execute(ApiRequest::get(ApiVersion::Legacy, "/bots/1/stats"), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(count, Count { server_count: 3 });

        let sent = transport.last();
        assert_eq!(sent.headers[AUTHORIZATION], "secret-token");
        assert_eq!(sent.url.as_str(), "http://localhost/api/bots/1/stats");
        assert!(sent.headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_current_uses_bearer_token() {
        let transport = Arc::new(RecordingTransport::new(204, ""));
        let pipeline = pipeline(transport.clone());

        pipeline
            .execute_unit(
                ApiRequest::post(ApiVersion::Current, "/projects/@me/commands")
                    .json(&Vec::<u8>::new())
                    .unwrap(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(sent.headers[AUTHORIZATION], "Bearer secret-token");
        assert_eq!(sent.url.as_str(), "http://localhost/api/v1/projects/@me/commands");
        assert_eq!(sent.headers[CONTENT_TYPE], "application/json");
        assert_eq!(sent.body.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_absent_fields_are_omitted() {
        let transport = Arc::new(RecordingTransport::new(200, "{}"));
        let pipeline = pipeline(transport.clone());
        let body = Body {
            server_count: 10,
            shard_id: None,
        };

        pipeline
            .execute_unit(
                ApiRequest::post(ApiVersion::Legacy, "/bots/1/stats").json(&body).unwrap(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(transport.last().body.as_deref(), Some(r#"{"server_count":10}"#));
    }

    #[tokio::test]
    async fn test_query_only_when_present() {
        let transport = Arc::new(RecordingTransport::new(200, "[]"));
        let pipeline = pipeline(transport.clone());
        let cancel = CancellationToken::new();

        let _: Vec<Count> = pipeline
            .execute(ApiRequest::get(ApiVersion::Legacy, "/bots"), &cancel)
            .await
            .unwrap();
        assert_eq!(transport.last().url.query(), None);

        let _: Vec<Count> = pipeline
            .execute(
                ApiRequest::get(ApiVersion::Legacy, "/bots/1/check").query("userId", 42),
                &cancel,
            )
            .await
            .unwrap();
        assert_eq!(transport.last().url.query(), Some("userId=42"));
    }

    #[tokio::test]
    async fn test_failure_is_classified_with_body() {
        let transport = Arc::new(
            RecordingTransport::new(429, r#"{"title":"Slow","detail":"down","retry-after":60}"#)
                .with_header("retry-after", "30"),
        );
        let pipeline = pipeline(transport);

        let err = pipeline
            .execute::<Count>(ApiRequest::get(ApiVersion::Legacy, "/bots"), &CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::RateLimited { message, retry_after }) => {
                assert_eq!(message, "Slow: down");
                assert_eq!(retry_after, Some(Duration::from_secs(30)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_schema_mismatch_keeps_raw_body() {
        let transport = Arc::new(RecordingTransport::new(200, r#"{"server_count":"lots"}"#));
        let pipeline = pipeline(transport);

        let err = pipeline
            .execute::<Count>(ApiRequest::get(ApiVersion::Legacy, "/bots"), &CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Deserialization { body, .. }) => {
                assert_eq!(body, r#"{"server_count":"lots"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_not_an_empty_result() {
        let transport = Arc::new(RecordingTransport::new(200, ""));
        let pipeline = pipeline(transport);

        let err = pipeline
            .execute::<Vec<Count>>(ApiRequest::get(ApiVersion::Legacy, "/bots"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Deserialization { .. })));
    }

    #[tokio::test]
    async fn test_transport_failure_is_wrapped() {
        let pipeline = pipeline(Arc::new(UnreachableTransport));

        let err = pipeline
            .execute::<Count>(ApiRequest::get(ApiVersion::Legacy, "/bots"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Transport(_))));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_cancelled_before_dispatch() {
        let transport = Arc::new(RecordingTransport::new(200, "{}"));
        let pipeline = pipeline(transport.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = pipeline
            .execute_unit(ApiRequest::get(ApiVersion::Legacy, "/bots"), &cancel)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_in_flight() {
        let pipeline = pipeline(Arc::new(HangingTransport));
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = pipeline
            .execute_unit(ApiRequest::get(ApiVersion::Legacy, "/bots"), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let endpoints = Endpoints::new("http://127.0.0.1:8080/").unwrap();
        let url = endpoints.url(ApiVersion::Current, "/projects/@me/votes/5", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/projects/@me/votes/5");
        assert!(Endpoints::new("not a url").is_err());
        assert_eq!(Endpoints::default().base_url(ApiVersion::Current), "https://top.gg/api/v1");
    }
}
