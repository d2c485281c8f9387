//! Terraform module inspector library
//!
//! Loads a module directory and renders its variables together with the
//! field patterns extracted from their validation conditions.

pub mod cli;
pub mod config;
pub mod output;

use crate::config::InspectConfig;
use anyhow::{Context, Result};
use tfconfig_core::Module;
use tfconfig_parser::ModuleLoader;
use tracing::{debug, info};

/// Load the configured module, applying the `constrained_only` filter
pub fn load_module(config: &InspectConfig) -> Result<Module> {
    let mut module = ModuleLoader::load_dir(&config.module_path).with_context(|| {
        format!(
            "Failed to load module from {}",
            config.module_path.display()
        )
    })?;
    info!(
        "Loaded {} variables from {}",
        module.variables.len(),
        module.path
    );

    if config.constrained_only {
        module
            .variables
            .retain(|_, var| var.field_patterns().is_some());
        debug!("{} constrained variables kept", module.variables.len());
    }

    Ok(module)
}

/// Load the configured module and render it in the configured format
pub fn inspect(config: &InspectConfig) -> Result<String> {
    let module = load_module(config)?;
    output::render(&module, config.output_format)
}
