//! Application settings and configuration structures.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Backend REST API configuration
    pub api: ApiSettings,

    /// Where the admin session is persisted
    pub session: SessionSettings,

    /// Home page carousel timers
    pub carousel: CarouselSettings,

    /// Public site contact details
    pub site: SiteSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Backend origin, e.g. "http://localhost:8000"
    pub base_url: String,

    /// Path prefix prepended to every endpoint
    pub path_prefix: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// JSON file holding the stored token and user record
    pub storage_path: PathBuf,
}

/// Carousel timer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CarouselSettings {
    /// Autoplay advance interval in milliseconds (default: 5000)
    pub autoplay_interval_ms: u64,

    /// Background slide refresh interval in milliseconds (default: 30000)
    pub refresh_interval_ms: u64,
}

/// Public site settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// WhatsApp number used for click-to-chat links
    pub whatsapp_number: String,

    /// Default WhatsApp greeting
    pub whatsapp_message: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the API URL or carousel intervals are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.path_prefix", "/api/v1")?
            .set_default("api.timeout_secs", 30)?
            .set_default("api.connect_timeout_secs", 5)?
            .set_default(
                "session.storage_path",
                default_session_path().to_string_lossy().to_string(),
            )?
            .set_default("carousel.autoplay_interval_ms", 5000_i64)?
            .set_default("carousel.refresh_interval_ms", 30000_i64)?
            .set_default("site.whatsapp_number", "+5219932081792")?
            .set_default(
                "site.whatsapp_message",
                "¡Hola! Me gustaría solicitar información sobre sus servicios.",
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__API__TIMEOUT_SECS=10 -> api.timeout_secs = 10
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", std::env::var("API_URL").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Check the invariants `load` cannot express through defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Message(format!("api.base_url '{}' is not a valid URL: {}", self.api.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Message(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.carousel.autoplay_interval_ms == 0 || self.carousel.refresh_interval_ms == 0 {
            return Err(ConfigError::Message(
                "carousel intervals must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

impl ApiSettings {
    /// Backend origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl CarouselSettings {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            refresh_interval_ms: 30000,
        }
    }
}

fn default_session_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".reset-admin")
        .join("session.json")
}
