use crate::presentation::config::{Environment, Settings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &Settings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
        }
    }
}
