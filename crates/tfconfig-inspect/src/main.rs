//! tfconfig-inspect command-line tool
//!
//! Prints the variables of a Terraform module with their validation field
//! patterns as JSON or YAML.

use anyhow::Result;
use clap::Parser;
use tfconfig_inspect::cli::Cli;
use tfconfig_inspect::config::InspectConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let arguments override it
    let config = cli.apply(InspectConfig::load_from(cli.config.as_deref())?);

    init_tracing(&config)?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let rendered = tfconfig_inspect::inspect(&config)?;
    println!("{}", rendered);

    Ok(())
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so stdout stays machine readable.
fn init_tracing(config: &InspectConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directives().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
