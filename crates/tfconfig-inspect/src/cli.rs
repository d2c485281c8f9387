//! Command-line arguments

use crate::config::{InspectConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tfconfig-inspect",
    version,
    about = "Inspect Terraform module variables and their validation field patterns"
)]
pub struct Cli {
    /// Module directory (defaults to the configured module path)
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only report variables whose validation constrains fields
    #[arg(long)]
    pub constrained: bool,
}

impl Cli {
    /// Override loaded configuration with the given arguments
    pub fn apply(&self, mut config: InspectConfig) -> InspectConfig {
        if let Some(dir) = &self.dir {
            config.module_path = dir.clone();
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if self.constrained {
            config.constrained_only = true;
        }
        config
    }
}
