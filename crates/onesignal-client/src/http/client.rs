/*
[INPUT]:  HTTP configuration (root URL, timeouts, authentication mode)
[OUTPUT]: Configured reqwest client and raw JSON results for API calls
[POS]:    HTTP layer - core client implementation shared by app and user clients
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::http::{AuthMode, Endpoint, OneSignalError, Result};

/// Root URL of the OneSignal REST API
pub const BASE_URL: &str = "https://onesignal.com/api/v1/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Base HTTP client for the OneSignal API
#[derive(Debug, Clone)]
pub struct OneSignalClient {
    http_client: Client,
    base_url: Url,
    mode: AuthMode,
}

impl OneSignalClient {
    /// Create a new client with default configuration
    pub fn new(mode: AuthMode) -> Result<Self> {
        Self::with_config(mode, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(mode: AuthMode, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(mode, config, BASE_URL)
    }

    /// Create a new client against a custom root URL (proxies, mock servers)
    pub fn with_config_and_base_url(
        mode: AuthMode,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(mode.headers()?)
            .build()
            .map_err(|e| OneSignalError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
            mode,
        })
    }

    /// Authentication mode of this client
    pub fn mode(&self) -> &AuthMode {
        &self.mode
    }

    /// Root URL every endpoint is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers attached to every request
    pub fn headers(&self) -> Result<HeaderMap> {
        self.mode.headers()
    }

    /// Build full URL for an endpoint
    pub fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url> {
        Ok(self.base_url.join(&endpoint.path())?)
    }

    fn request(&self, method: Method, endpoint: &Endpoint<'_>) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!(%method, endpoint = endpoint.name(), %url, "building request");
        Ok(self.http_client.request(method, url))
    }

    pub async fn get(&self, endpoint: &Endpoint<'_>) -> Result<Value> {
        let builder = self.request(Method::GET, endpoint)?;
        self.send_json(builder).await
    }

    /// Body goes out with the default `application/json; charset=utf-8` content type
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint<'_>,
        payload: &T,
    ) -> Result<Value> {
        let builder = self
            .request(Method::POST, endpoint)?
            .body(serde_json::to_vec(payload)?);
        self.send_json(builder).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint<'_>,
        payload: &T,
    ) -> Result<Value> {
        let builder = self
            .request(Method::PUT, endpoint)?
            .body(serde_json::to_vec(payload)?);
        self.send_json(builder).await
    }

    pub async fn delete(&self, endpoint: &Endpoint<'_>) -> Result<Value> {
        let builder = self.request(Method::DELETE, endpoint)?;
        self.send_json(builder).await
    }

    /// Send a request and pass the JSON body through untouched.
    ///
    /// Non-2xx statuses become [`OneSignalError::Api`] with the raw body,
    /// an empty success body becomes `Value::Null`.
    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(OneSignalError::api_error(status, body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Parse the root URL and make sure relative joins keep its path
fn normalize_base_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{base_url}/"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = OneSignalClient::new(AuthMode::app("key")).expect("client init");
        let url = client
            .url(&Endpoint::ViewNotifications { app_id: "abc" })
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://onesignal.com/api/v1/notifications?app_id=abc"
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = OneSignalClient::with_config_and_base_url(
            AuthMode::app("key"),
            ClientConfig::default(),
            "http://localhost:8080/api/v1",
        )
        .expect("client init");
        let url = client
            .url(&Endpoint::CsvExport { app_id: "abc" })
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/players/csv_export?app_id=abc"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = OneSignalClient::with_config_and_base_url(
            AuthMode::app("key"),
            ClientConfig::default(),
            "not a url",
        )
        .unwrap_err();
        assert!(matches!(err, OneSignalError::UrlParse(_)));
    }

    #[test]
    fn test_invalid_key_fails_construction() {
        let err = OneSignalClient::new(AuthMode::user("bad\r\nkey")).unwrap_err();
        assert!(matches!(err, OneSignalError::Config(_)));
    }
}
