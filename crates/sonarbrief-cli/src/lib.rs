// Rust guideline compliant 2026-10-19

//! Sonarbrief CLI library.
//!
//! This library exposes the run loop and logging setup for use in tests
//! and by the `sonarbrief` binary.

use anyhow::Result;
use sonarbrief_core::{Config, SonarClient, Transport};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Loads the configuration, fetches every issue, and returns the report.
///
/// Configuration is resolved before the transport is touched, so a
/// missing variable fails without any network request.
///
/// # Arguments
///
/// * `lookup` - Returns the value of an environment variable, if set
/// * `transport` - Transport used for every API request
///
/// # Errors
///
/// Returns an error if `SONAR_TOKEN` or `PROJECT_KEY` is missing.
pub fn run<F, T>(lookup: F, transport: T) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
    T: Transport,
{
    let config = Config::from_lookup(lookup)?;
    info!(project = %config.project_key, "Fetching SonarCloud issues...");

    let client = SonarClient::new(config, transport);
    Ok(client.generate_report())
}

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
