//! Gateway HTTP client
//!
//! One [`GatewayClient`] per backend service. It owns the service's URL
//! root and turns every transport outcome into a classified
//! [`RepositoryError`]:
//!
//! | Outcome | Error |
//! |---|---|
//! | connect failure, timeout, 5xx | `ServiceUnreachable` |
//! | 404 on an entity path | `NotFound` |
//! | other 4xx | `RequestRejected` |
//! | 2xx with an undecodable body | `RequestRejected` |

use console_application::{BackendService, EntityKind, RepositoryError};
use console_domain::core::string::preview;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Longest backend error body quoted in a `RequestRejected` message
const MAX_MESSAGE_CHARS: usize = 200;

/// Where the gateway lives and how each service is routed behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub conference_prefix: String,
    pub keynote_prefix: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            conference_prefix: "conference-service/api".to_string(),
            keynote_prefix: "keynote-service/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn root(&self, service: BackendService) -> String {
        let prefix = match service {
            BackendService::Conference => &self.conference_prefix,
            BackendService::Keynote => &self.keynote_prefix,
        };
        join_url(&self.base_url, prefix)
    }

    pub fn conference_url(&self, path: &str) -> String {
        join_url(&self.root(BackendService::Conference), path)
    }

    pub fn keynote_url(&self, path: &str) -> String {
        join_url(&self.root(BackendService::Keynote), path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// What a request addresses; decides how a 404 is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// A collection route; a 404 means the route itself is wrong.
    Collection,
    /// A single entity; a 404 means the entity does not exist.
    Entity(EntityKind, i64),
}

/// Map a non-success status to a repository error.
pub(crate) fn classify_status(
    service: BackendService,
    status: StatusCode,
    target: Target,
    body: &str,
) -> RepositoryError {
    if status.is_server_error() {
        return RepositoryError::unreachable(service, format!("HTTP {status}"));
    }
    if status == StatusCode::NOT_FOUND
        && let Target::Entity(entity, id) = target
    {
        return RepositoryError::not_found(entity, id);
    }
    let body = body.trim();
    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("request rejected").to_string()
    } else {
        preview(body, MAX_MESSAGE_CHARS)
    };
    RepositoryError::RequestRejected {
        service,
        status: status.as_u16(),
        message,
    }
}

/// HTTP access to one backend service through the gateway
pub struct GatewayClient {
    http: reqwest::Client,
    service: BackendService,
    root: String,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig, service: BackendService) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("conference-console/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            service,
            root: config.root(service),
        })
    }

    pub fn service(&self) -> BackendService {
        self.service
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.root, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        target: Target,
    ) -> Result<T, RepositoryError> {
        let response = self.send(self.request(Method::GET, path), target).await?;
        self.decode(response).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        target: Target,
    ) -> Result<T, RepositoryError> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(request, target).await?;
        self.decode(response).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        target: Target,
    ) -> Result<T, RepositoryError> {
        let request = self.request(Method::PUT, path).json(body);
        let response = self.send(request, target).await?;
        self.decode(response).await
    }

    /// DELETE; any 2xx (200 or 204) counts as success and the body is ignored.
    pub(crate) async fn delete(&self, path: &str, target: Target) -> Result<(), RepositoryError> {
        self.send(self.request(Method::DELETE, path), target).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {} {}", self.service, method, url);
        self.http.request(method, url)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        target: Target,
    ) -> Result<Response, RepositoryError> {
        let response = request
            .send()
            .await
            .map_err(|e| RepositoryError::unreachable(self.service, transport_reason(&e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify_status(self.service, status, target, &body);
        debug!("{} service answered {}: {}", self.service, status, error);
        Err(error)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, RepositoryError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RepositoryError::unreachable(self.service, transport_reason(&e)))?;
        serde_json::from_slice(&bytes).map_err(|e| RepositoryError::RequestRejected {
            service: self.service,
            status: status.as_u16(),
            message: format!("undecodable response body: {e}"),
        })
    }
}

fn transport_reason(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else {
        error.to_string()
    }
}
