/*
[INPUT]:  Account user auth key and app settings
[OUTPUT]: Raw JSON results of account-scoped API calls
[POS]:    HTTP layer - user endpoints (apps), authenticated with the user auth key
[UPDATE]: When adding account-level endpoints
*/

use serde_json::Value;
use tracing::instrument;

use crate::http::{AuthMode, ClientConfig, Endpoint, OneSignalClient, Result};
use crate::types::AppSettings;

/// Client for account-wide endpoints
#[derive(Debug, Clone)]
pub struct UserClient {
    client: OneSignalClient,
}

impl UserClient {
    /// The key is under Account & API Keys in the OneSignal dashboard
    pub fn new(user_auth_key: impl Into<String>) -> Result<Self> {
        Self::with_config(user_auth_key, ClientConfig::default())
    }

    pub fn with_config(user_auth_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: OneSignalClient::with_config(AuthMode::user(user_auth_key), config)?,
        })
    }

    pub fn with_base_url(
        user_auth_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            client: OneSignalClient::with_config_and_base_url(
                AuthMode::user(user_auth_key),
                config,
                base_url,
            )?,
        })
    }

    pub fn inner(&self) -> &OneSignalClient {
        &self.client
    }

    /// GET apps
    #[instrument(skip(self))]
    pub async fn get_apps(&self) -> Result<Value> {
        self.client.get(&Endpoint::Apps).await
    }

    /// GET apps/{app_id}
    #[instrument(skip(self))]
    pub async fn get_app(&self, app_id: &str) -> Result<Value> {
        self.client.get(&Endpoint::App { app_id }).await
    }

    /// POST apps
    #[instrument(skip(self, settings), fields(name = %settings.name))]
    pub async fn create_app(&self, settings: &AppSettings) -> Result<Value> {
        self.client.post(&Endpoint::Apps, settings).await
    }

    /// PUT apps/{app_id}
    #[instrument(skip(self, settings))]
    pub async fn update_app(&self, app_id: &str, settings: &AppSettings) -> Result<Value> {
        self.client.put(&Endpoint::App { app_id }, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::OneSignalError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> UserClient {
        UserClient::with_base_url("user-key", ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_get_apps_uses_user_key() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/apps"))
            .and(header("authorization", "Basic user-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "app-1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).get_apps().await.expect("get_apps failed");
        assert_eq!(response, json!([{ "id": "app-1" }]));
    }

    #[tokio::test]
    async fn test_get_app() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/apps/app-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "app-1", "players": 12 })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).get_app("app-1").await.expect("get_app failed");
        assert_eq!(response["players"], 12);
    }

    #[tokio::test]
    async fn test_create_and_update_app() {
        let server = MockServer::start().await;

        let _create = Mock::given(method("POST"))
            .and(path("/apps"))
            .and(body_json(json!({ "name": "Demo" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "app-2", "name": "Demo" })))
            .expect(1)
            .mount(&server)
            .await;

        let _update = Mock::given(method("PUT"))
            .and(path("/apps/app-2"))
            .and(body_json(json!({ "name": "Demo", "site_name": "Demo Site" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "app-2" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let created = client
            .create_app(&AppSettings::new("Demo"))
            .await
            .expect("create_app failed");
        assert_eq!(created["id"], "app-2");

        let settings = AppSettings {
            site_name: Some("Demo Site".to_string()),
            ..AppSettings::new("Demo")
        };
        client
            .update_app("app-2", &settings)
            .await
            .expect("update_app failed");
    }

    #[tokio::test]
    async fn test_rejected_key_is_auth_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(401).set_body_raw(
                r#"{"errors":["Please include a case-sensitive header of Authorization"]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).get_apps().await.unwrap_err();
        assert!(err.is_auth_error());
        assert!(matches!(err, OneSignalError::Api { status: 401, .. }));
    }
}
