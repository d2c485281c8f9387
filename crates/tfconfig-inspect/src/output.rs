//! Rendering of inspected modules

use crate::config::OutputFormat;
use anyhow::Result;
use tfconfig_core::Module;

/// Render a module in the requested format
pub fn render(module: &Module, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(module)?,
        OutputFormat::Yaml => serde_yaml::to_string(module)?,
    };
    Ok(rendered)
}
