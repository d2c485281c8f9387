//! Module loader
//!
//! Loads every Terraform source file of a directory into a [`Module`].

use crate::error::{ParseError, Result};
use crate::variable_parser::VariableParser;
use std::fs;
use std::path::{Path, PathBuf};
use tfconfig_core::{Module, Variable};

/// Extension of Terraform native syntax files
pub const TERRAFORM_EXTENSION: &str = "tf";

/// Module loader
pub struct ModuleLoader;

impl ModuleLoader {
    /// Load all variables of the module in `dir`.
    ///
    /// Files are read in name order. Primary files may not declare the same
    /// variable twice; a declaration in an override file (`override.tf` or
    /// `*_override.tf`) replaces the earlier one.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Module> {
        let dir = dir.as_ref();
        let (primary, overrides) = Self::config_files(dir)?;
        log::debug!(
            "Loading module {} ({} file(s), {} override(s))",
            dir.display(),
            primary.len(),
            overrides.len()
        );

        let mut module = Module::new(dir.display().to_string());

        for path in &primary {
            for var in Self::load_file(path)? {
                if let Some(existing) = module.variables.get(&var.name) {
                    return Err(ParseError::DuplicateVariable {
                        name: var.name.clone(),
                        first: existing.pos.clone(),
                        second: var.pos,
                    });
                }
                module.variables.insert(var.name.clone(), var);
            }
        }

        for path in &overrides {
            for var in Self::load_file(path)? {
                if module.variables.contains_key(&var.name) {
                    log::debug!("Variable '{}' overridden at {}", var.name, var.pos);
                }
                module.variables.insert(var.name.clone(), var);
            }
        }

        Ok(module)
    }

    /// Load all variables declared in a single file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Variable>> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let vars = VariableParser::parse(&source, &path.display().to_string())?;
        log::debug!("Loaded {} variable(s) from {}", vars.len(), path.display());

        Ok(vars)
    }

    /// List primary and override configuration files of a directory, each
    /// sorted by name
    fn config_files(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let io_err = |source| ParseError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && Self::is_config_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        Ok(files.into_iter().partition(|path| !Self::is_override_file(path)))
    }

    /// Whether a path is a Terraform source file that should be loaded
    pub fn is_config_file(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        // Editor backups and hidden files
        if name.starts_with('.') || name.ends_with('~') || (name.starts_with('#') && name.ends_with('#')) {
            return false;
        }

        path.extension().and_then(|ext| ext.to_str()) == Some(TERRAFORM_EXTENSION)
    }

    /// Whether a path is an override file
    pub fn is_override_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem == "override" || stem.ends_with("_override"))
    }
}
