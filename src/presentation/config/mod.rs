mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    FetchSettings, LlmSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
    UploadSettings,
};
