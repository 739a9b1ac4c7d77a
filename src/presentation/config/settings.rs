use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_MIN_ALPHA_RATIO;

pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub validation: ValidationSettings,
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    /// Minimum share of the text, in characters, made up of alphabetic tokens.
    pub min_alpha_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_body_bytes: usize,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}.toml`, and `APP_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `APP_SERVER__PORT=9000`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("validation.min_alpha_ratio", DEFAULT_MIN_ALPHA_RATIO)?
            .set_default("uploads.max_body_bytes", DEFAULT_MAX_BODY_BYTES as i64)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
            validation: ValidationSettings {
                min_alpha_ratio: DEFAULT_MIN_ALPHA_RATIO,
            },
            uploads: UploadSettings {
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            },
        }
    }
}
