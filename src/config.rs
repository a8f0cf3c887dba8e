use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::validator::{AddressPolicy, DEFAULT_MIN_LENGTH};

/// Local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub validation: ValidationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout for backend requests; none by default
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl ValidationSettings {
    pub fn policy(&self) -> AddressPolicy {
        AddressPolicy::new(self.min_length)
    }
}

fn default_min_length() -> usize { DEFAULT_MIN_LENGTH }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default, then config/local)
    /// 3. Environment variables (prefixed with FARFETCHR__)
    /// 4. `API_URL`, if set, replaces the backend base URL
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenv::dotenv().ok();

        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment());

        finish(builder)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment());

        finish(builder)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("validation.min_length", DEFAULT_MIN_LENGTH as i64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

// e.g., FARFETCHR__API__BASE_URL -> api.base_url
fn environment() -> Environment {
    Environment::with_prefix("FARFETCHR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let builder = match std::env::var("API_URL") {
        Ok(url) if !url.trim().is_empty() => builder.set_override("api.base_url", url)?,
        _ => builder,
    };

    builder.build()?.try_deserialize()
}
