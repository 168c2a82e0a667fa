/*
[INPUT]:  App id, app REST API key, notifications and export options
[OUTPUT]: Raw JSON results of app-scoped API calls
[POS]:    HTTP layer - app-scoped endpoints (notifications, player CSV export)
[UPDATE]: When adding app-scoped endpoints or changing payload shapes
*/

use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::instrument;

use crate::http::{AuthMode, ClientConfig, Endpoint, OneSignalClient, Result};
use crate::types::{CsvExportRequest, Notification};

/// Client bound to a single OneSignal app, authenticated with its REST API key
#[derive(Debug, Clone)]
pub struct AppClient {
    app_id: String,
    client: OneSignalClient,
}

impl AppClient {
    /// Both values are under Dashboard > App Settings > Keys & IDs
    pub fn new(app_id: impl Into<String>, app_api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(app_id, app_api_key, ClientConfig::default())
    }

    pub fn with_config(
        app_id: impl Into<String>,
        app_api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            app_id: app_id.into(),
            client: OneSignalClient::with_config(AuthMode::app(app_api_key), config)?,
        })
    }

    pub fn with_base_url(
        app_id: impl Into<String>,
        app_api_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            app_id: app_id.into(),
            client: OneSignalClient::with_config_and_base_url(
                AuthMode::app(app_api_key),
                config,
                base_url,
            )?,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Underlying base client
    pub fn inner(&self) -> &OneSignalClient {
        &self.client
    }

    /// Default headers for app requests
    pub fn get_headers(&self) -> Result<HeaderMap> {
        self.client.headers()
    }

    /// Start a notification addressed to this app
    pub fn notification(&self) -> Notification {
        Notification::new(self.app_id.clone())
    }

    /// List notifications of the app
    ///
    /// GET notifications?app_id={app_id}
    #[instrument(skip(self), fields(app_id = %self.app_id))]
    pub async fn get_notifications(&self) -> Result<Value> {
        let endpoint = Endpoint::ViewNotifications {
            app_id: &self.app_id,
        };
        self.client.get(&endpoint).await
    }

    /// List one page of notifications
    ///
    /// GET notifications?app_id={app_id}&limit={limit}&offset={offset}
    #[instrument(skip(self), fields(app_id = %self.app_id))]
    pub async fn get_notifications_page(&self, limit: u32, offset: u32) -> Result<Value> {
        let endpoint = Endpoint::NotificationPage {
            app_id: &self.app_id,
            limit,
            offset,
        };
        self.client.get(&endpoint).await
    }

    /// View a single notification
    ///
    /// GET notifications/{id}?app_id={app_id}
    #[instrument(skip(self), fields(app_id = %self.app_id))]
    pub async fn get_notification(&self, notification_id: &str) -> Result<Value> {
        let endpoint = Endpoint::ViewNotification {
            app_id: &self.app_id,
            notification_id,
        };
        self.client.get(&endpoint).await
    }

    /// Create and send a notification
    ///
    /// POST notifications
    #[instrument(skip(self, notification), fields(app_id = %self.app_id))]
    pub async fn create_notification(&self, notification: &Notification) -> Result<Value> {
        let payload = notification.payload()?;
        self.client.post(&Endpoint::Notifications, &payload).await
    }

    /// Cancel a scheduled notification
    ///
    /// DELETE notifications/{id}?app_id={app_id}
    #[instrument(skip(self), fields(app_id = %self.app_id))]
    pub async fn cancel_notification(&self, notification_id: &str) -> Result<Value> {
        let endpoint = Endpoint::CancelNotification {
            app_id: &self.app_id,
            notification_id,
        };
        self.client.delete(&endpoint).await
    }

    /// Request a CSV export of the app's players.
    ///
    /// Names other than `location`, `country` and `rooted` are dropped.
    ///
    /// POST players/csv_export?app_id={app_id}
    #[instrument(skip(self, extra_fields), fields(app_id = %self.app_id))]
    pub async fn csv_export<I, S>(&self, extra_fields: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let payload = CsvExportRequest::from_names(extra_fields);
        let endpoint = Endpoint::CsvExport {
            app_id: &self.app_id,
        };
        self.client.post(&endpoint, &payload).await
    }
}
