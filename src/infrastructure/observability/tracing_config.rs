use crate::presentation::config::LoggingSettings;

/// Subscriber options derived from the `logging` settings.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_level: String,
}

impl TracingConfig {
    pub fn from_settings(environment: &str, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json,
            default_level: logging.level.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is not set. The configured level applies
    /// to this crate and to the HTTP layers alike.
    pub fn default_directives(&self) -> String {
        let level = self.default_level.trim();
        if level.is_empty() {
            "info".to_string()
        } else {
            level.to_string()
        }
    }
}
