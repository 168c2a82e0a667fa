/*
[INPUT]:  App REST API key or account user auth key
[OUTPUT]: Default request headers for the selected mode
[POS]:    HTTP layer - mode-based header selection
[UPDATE]: When OneSignal changes its authorization scheme
*/

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::http::{OneSignalError, Result};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Which key authenticates requests.
///
/// App mode covers notification and player endpoints of a single app,
/// user mode covers account-wide endpoints such as `apps`.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    App { app_api_key: String },
    User { user_auth_key: String },
}

impl AuthMode {
    pub fn app(app_api_key: impl Into<String>) -> Self {
        AuthMode::App {
            app_api_key: app_api_key.into(),
        }
    }

    pub fn user(user_auth_key: impl Into<String>) -> Self {
        AuthMode::User {
            user_auth_key: user_auth_key.into(),
        }
    }

    /// Key sent in the `Authorization` header
    fn key(&self) -> &str {
        match self {
            AuthMode::App { app_api_key } => app_api_key,
            AuthMode::User { user_auth_key } => user_auth_key,
        }
    }

    /// Build the default headers for this mode
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut authorization = HeaderValue::from_str(&format!("Basic {}", self.key()))
            .map_err(|e| OneSignalError::Config(format!("invalid API key: {e}")))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        Ok(headers)
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::App { .. } => f.write_str("AuthMode::App"),
            AuthMode::User { .. } => f.write_str("AuthMode::User"),
        }
    }
}
