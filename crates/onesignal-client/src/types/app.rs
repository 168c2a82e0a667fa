/*
[INPUT]:  App name and platform credentials
[OUTPUT]: Request body for creating or updating an app
[POS]:    Data layer - account-level app settings (user mode)
[UPDATE]: When exposing more app platform settings
*/

use serde::{Deserialize, Serialize};

/// Body of `POST apps` and `PUT apps/{app_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    /// `sandbox` or `production`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_env: Option<String>,
    /// Base64 encoded p12 certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl AppSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
