/*
[INPUT]:  YAML configuration file and ONESIGNAL_* environment variables
[OUTPUT]: Resolved CLI configuration and ready-to-use API clients
[POS]:    Configuration layer - credentials and connection settings
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result, bail};
use config::{Environment, File, FileFormat, Map};
use onesignal_client::{AppClient, ClientConfig, UserClient};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides, e.g. `ONESIGNAL_APP_ID`
pub const ENV_PREFIX: &str = "ONESIGNAL";

/// Top-level configuration for the OneSignal CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// App identifier (Dashboard > App Settings > Keys & IDs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// REST API key of the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_api_key: Option<String>,
    /// Account-wide user auth key, only needed for `apps` commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_auth_key: Option<String>,
    /// Override of the API root URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_api_key: None,
            user_auth_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// `~/.config/onesignal/config.yaml` (platform config dir)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("onesignal").join("config.yaml"))
    }

    /// Load configuration from a YAML file and the process environment.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`CliConfig::load`] with an injectable environment map
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (Self::default_path(), false),
        };

        let mut builder = config::Config::builder();
        if let Some(file) = &file {
            builder = builder.add_source(
                File::from(file.as_path())
                    .format(FileFormat::Yaml)
                    .required(required),
            );
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .context("read configuration sources")?;

        config
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn app_id(&self) -> Result<&str> {
        match self.app_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => bail!("app_id is not configured (config file or {ENV_PREFIX}_APP_ID)"),
        }
    }

    /// Client for notification and export commands
    pub fn app_client(&self) -> Result<AppClient> {
        let app_id = self.app_id()?;
        let Some(app_api_key) = self.app_api_key.as_deref() else {
            bail!("app_api_key is not configured (config file or {ENV_PREFIX}_APP_API_KEY)");
        };

        let client = match self.base_url.as_deref() {
            Some(base_url) => {
                AppClient::with_base_url(app_id, app_api_key, self.client_config(), base_url)
            }
            None => AppClient::with_config(app_id, app_api_key, self.client_config()),
        };
        client.context("create app client")
    }

    /// Client for `apps` commands
    pub fn user_client(&self) -> Result<UserClient> {
        let Some(user_auth_key) = self.user_auth_key.as_deref() else {
            bail!("user_auth_key is not configured (config file or {ENV_PREFIX}_USER_AUTH_KEY)");
        };

        let client = match self.base_url.as_deref() {
            Some(base_url) => {
                UserClient::with_base_url(user_auth_key, self.client_config(), base_url)
            }
            None => UserClient::with_config(user_auth_key, self.client_config()),
        };
        client.context("create user client")
    }

    /// Write the configuration as YAML, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(self).context("serialize config to YAML")?;
        std::fs::write(path, yaml).with_context(|| format!("write config to {}", path.display()))
    }
}
