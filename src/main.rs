//! # reset-admin
//!
//! Admin console for the RESET Multiservicios site.
//!
//! This is the entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Session store and API client
//! - The requested console command

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use reset_portal::config::Settings;
use reset_portal::presentation::cli::Cli;
use reset_portal::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for structured logging
    reset_portal::telemetry::init_tracing();

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    debug!(
        api = %settings.api.base_url,
        prefix = %settings.api.path_prefix,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings)?;
    application.run(cli).await?;

    Ok(())
}
