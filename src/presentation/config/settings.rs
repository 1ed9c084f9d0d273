use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: i64 = 20 * 1024 * 1024;
const DEFAULT_USER_AGENT: &str = concat!("fineprint/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub fetch: FetchSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.<env>` file and
    /// `APP_`-prefixed environment variables (`APP_LLM__API_KEY`), in that
    /// order. `OPENAI_API_KEY` fills the API key when nothing else set it.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("llm.temperature", DEFAULT_TEMPERATURE)?
            .set_default("llm.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("fetch.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
            .set_default("upload.max_body_bytes", DEFAULT_MAX_BODY_BYTES)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                settings.llm.api_key = key;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SettingsError::Invalid {
                field: "llm.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.llm.temperature),
            });
        }
        if self.llm.timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                field: "llm.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fetch.timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                field: "fetch.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.upload.max_body_bytes == 0 {
            return Err(SettingsError::Invalid {
                field: "upload.max_body_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
