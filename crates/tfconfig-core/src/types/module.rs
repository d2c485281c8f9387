//! Module record

use super::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loaded Terraform module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Directory the module was loaded from
    pub path: String,

    /// Input variables keyed by name
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
}

impl Module {
    /// Create an empty module for a directory
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Get a variable by name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Names of variables whose validation constrains at least one field
    pub fn constrained_variables(&self) -> Vec<&str> {
        self.variables
            .values()
            .filter(|var| var.field_patterns().is_some_and(|fields| !fields.is_empty()))
            .map(|var| var.name.as_str())
            .collect()
    }
}
