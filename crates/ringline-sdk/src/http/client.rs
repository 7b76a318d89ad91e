/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation and dispatch
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::auth::Credentials;
use crate::http::error::{Result, RinglineError};
use crate::types::Envelope;

/// Base URL for the Ringline API
const API_BASE_URL: &str = "https://api.ringline.com";

/// Environment variables read by [`RinglineClient::from_env`]
const ENV_API_KEY: &str = "RINGLINE_API_KEY";
const ENV_BASE_URL: &str = "RINGLINE_BASE_URL";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("ringline-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the Ringline API
#[derive(Debug, Clone)]
pub struct RinglineClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    timeout_secs: u64,
}

impl RinglineClient {
    /// Create a new client authenticated with an API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::ApiKey(api_key.into()), ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, API_BASE_URL)
    }

    /// Create a new client against an explicit base URL (tests, proxies)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Create a client from `RINGLINE_API_KEY` (and optional `RINGLINE_BASE_URL`)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RinglineError::Config(format!("{ENV_API_KEY} is not set")))?;

        let credentials = Credentials::ApiKey(api_key);
        match std::env::var(ENV_BASE_URL) {
            Ok(base) if !base.trim().is_empty() => {
                Self::with_config_and_base_url(credentials, ClientConfig::default(), &base)
            }
            _ => Self::with_config(credentials, ClientConfig::default()),
        }
    }

    /// Replace the credentials used for subsequent requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Get the current credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build a request builder with the bearer header attached
    pub(crate) fn api_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        Ok(self
            .http_client
            .request(method, url)
            .bearer_auth(self.credentials.bearer()))
    }

    /// Build a request builder without authentication (OAuth endpoints
    /// authenticate with HTTP Basic instead)
    pub(crate) fn plain_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        Ok(self.http_client.request(method, url))
    }

    /// Dispatch a request and deserialize the raw response body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let request = builder.build()?;
        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            method = %request.method(),
            path = request.url().path(),
            "dispatching API request"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| self.map_transport_error(e))?;

        debug!(%request_id, status = response.status().as_u16(), "API response received");
        self.decode_response(response).await
    }

    /// Dispatch a request whose response is wrapped in a `{"data": ...}` envelope
    pub(crate) async fn send_enveloped<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let envelope: Envelope<T> = self.send_json(builder).await?;
        Ok(envelope.data)
    }

    fn map_transport_error(&self, error: reqwest::Error) -> RinglineError {
        if error.is_timeout() {
            RinglineError::Timeout {
                duration: self.timeout_secs,
            }
        } else {
            RinglineError::Http(error)
        }
    }

    async fn decode_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(1);
            return Err(RinglineError::RateLimit { retry_after });
        }

        let body = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&body).map_err(RinglineError::from)
        } else {
            Err(RinglineError::from_response(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("ringline-sdk/"));
    }

    #[test]
    fn client_joins_paths_onto_base_url() {
        let client = RinglineClient::with_config_and_base_url(
            Credentials::ApiKey("key".to_string()),
            ClientConfig::default(),
            "http://127.0.0.1:4010",
        )
        .expect("client init");

        let builder = client.api_request(Method::GET, "/v2/calls/cc-1").unwrap();
        let request = builder.build().unwrap();
        assert_eq!(request.url().path(), "/v2/calls/cc-1");
        assert_eq!(request.url().host_str(), Some("127.0.0.1"));
        assert!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("Bearer ")
        );
    }

    #[test]
    fn plain_request_carries_no_authorization() {
        let client = RinglineClient::new("key").expect("client init");
        let builder = client.plain_request(Method::POST, "/oauth/token").unwrap();
        let request = builder.build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = RinglineClient::with_config_and_base_url(
            Credentials::ApiKey("key".to_string()),
            ClientConfig::default(),
            "not a url",
        );
        assert!(matches!(result, Err(RinglineError::UrlParse(_))));
    }
}
