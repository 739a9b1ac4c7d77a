mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_MAX_BODY_BYTES, LoggingSettings, ServerSettings, Settings, UploadSettings,
    ValidationSettings,
};
