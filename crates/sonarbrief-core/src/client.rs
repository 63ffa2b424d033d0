// Rust guideline compliant 2026-10-19

//! HTTP access to the SonarCloud web API.
//!
//! [`Transport`] is the seam between the fetchers and the network. The
//! production implementation is [`UreqTransport`]; tests substitute a
//! scripted transport.

use crate::{Config, Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// A GET request against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL without query string.
    pub url: String,
    /// Token sent as `Authorization: Bearer <token>`.
    pub bearer_token: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Returns the value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs blocking HTTP GET requests.
pub trait Transport {
    /// Sends the request.
    ///
    /// Any status code, including 4xx and 5xx, is returned as a response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if no response was received.
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).get(request)
    }
}

/// Transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport with default agent settings.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut call = self
            .agent
            .get(&request.url)
            .set("Authorization", &format!("Bearer {}", request.bearer_token));
        for (key, value) in &request.query {
            call = call.query(key, value);
        }

        match call.call() {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| Error::Transport(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => Ok(HttpResponse {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(err)) => Err(Error::Transport(err.to_string())),
        }
    }
}

/// Client for the three read-only endpoints used by the report.
///
/// Fetch operations live next to the data they produce: see
/// [`fetch_issues`](SonarClient::fetch_issues),
/// [`fetch_context`](SonarClient::fetch_context) and
/// [`fetch_rule_description`](SonarClient::fetch_rule_description).
#[derive(Debug)]
pub struct SonarClient<T> {
    config: Config,
    transport: T,
}

impl<T: Transport> SonarClient<T> {
    /// Creates a client for the configured project.
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a GET to `{base_url}/{path}` with bearer authorization.
    ///
    /// # Errors
    ///
    /// Returns an error only if the transport fails; non-success statuses
    /// are returned as responses.
    pub fn send(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let request = HttpRequest {
            url: format!("{}/{}", self.config.base_url, path),
            bearer_token: self.config.token.clone(),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        };
        debug!(url = %request.url, query = ?request.query, "GET");
        self.transport.get(&request)
    }

    /// Sends a GET and decodes a successful JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for a non-success status,
    /// [`Error::Json`] for an undecodable body, or the transport error.
    pub fn get_json<D: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<D> {
        let response = self.send(path, query)?;
        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
