//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus `API_URL`)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reset_portal::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Talking to {}{}", settings.api.base_url, settings.api.path_prefix);
//! ```

mod settings;

pub use settings::*;
