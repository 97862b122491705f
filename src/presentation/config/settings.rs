use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::http::BROWSER_USER_AGENT;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub rendering: RenderingSettings,
    pub fetch: FetchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub account_name: Option<String>,
    pub default_container: String,
    pub client_id: Option<String>,
    pub msi_endpoint: Option<String>,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderingSettings {
    pub font_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads settings for the environment named by `APP_ENVIRONMENT`.
    pub fn load() -> Result<(Environment, Self), ConfigError> {
        let environment = Environment::try_from(
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
        )
        .map_err(ConfigError::Message)?;

        Ok((environment, Self::load_for(environment)?))
    }

    /// Layers defaults, `config/base`, `config/{environment}`, `APP__*`
    /// variables and finally the bare variables of the original deployment.
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let environment_file = environment.config_file();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.provider", "azure")?
            .set_default("storage.default_container", "scraped-pages")?
            .set_default("storage.local_path", "./data/blobs")?
            .set_default("rendering.font_path", "assets/DejaVuSans.ttf")?
            .set_default("fetch.timeout_secs", 30)?
            .set_default("fetch.user_agent", BROWSER_USER_AGENT)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&environment_file).required(false))
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .set_override_option("server.port", env_var("SERVER_PORT"))?
            .set_override_option("storage.account_name", env_var("STORAGE_ACCOUNT_NAME"))?
            .set_override_option("storage.default_container", env_var("CONTAINERNAME"))?
            .set_override_option("storage.client_id", env_var("CLIENT_ID"))?
            .set_override_option("rendering.font_path", env_var("FONT_PATH"))?
            .set_override_option(
                "logging.enable_json",
                env_var("LOG_FORMAT").map(|v| v.eq_ignore_ascii_case("json")),
            )?
            .build()?
            .try_deserialize()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
