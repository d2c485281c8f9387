//! Inspector configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up when no explicit path is given (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "config/inspect";

/// Prefix of environment variables, e.g. `TFCONFIG_OUTPUT_FORMAT=yaml`
pub const ENV_PREFIX: &str = "TFCONFIG";

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Inspector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Module directory to inspect
    #[serde(default = "default_module_path")]
    pub module_path: PathBuf,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// Only report variables whose validation constrains fields
    #[serde(default)]
    pub constrained_only: bool,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_module_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            module_path: default_module_path(),
            output_format: OutputFormat::default(),
            constrained_only: false,
            log_level: default_log_level(),
        }
    }
}

impl InspectConfig {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from `path` (or the default file when `None`)
    /// and environment variables.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config_result = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) if path.is_some() => Err(anyhow::anyhow!("Failed to load config: {}", e)),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Default `EnvFilter` directives for the workspace crates
    pub fn log_directives(&self) -> String {
        ["tfconfig_inspect", "tfconfig_parser", "tfconfig_core"]
            .iter()
            .map(|target| format!("{}={}", target, self.log_level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_config_default() {
        let config = InspectConfig::default();

        assert_eq!(config.module_path, PathBuf::from("."));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.constrained_only);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_log_directives() {
        let config = InspectConfig {
            log_level: "debug".to_string(),
            ..InspectConfig::default()
        };

        assert_eq!(
            config.log_directives(),
            "tfconfig_inspect=debug,tfconfig_parser=debug,tfconfig_core=debug"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: InspectConfig = serde_json::from_str(r#"{"output_format":"yaml"}"#).unwrap();

        assert_eq!(config.output_format, OutputFormat::Yaml);
        assert_eq!(config.module_path, PathBuf::from("."));
        assert_eq!(config.log_level, "warn");
    }
}
