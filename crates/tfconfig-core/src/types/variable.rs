//! Variable and validation records

use crate::condition::{regex_literal, return_fields, FieldPatterns};
use serde::{Deserialize, Serialize};

/// Position of a declaration in a source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePos {
    /// File name as given to the loader
    pub filename: String,

    /// 1-based line number
    pub line: usize,
}

impl SourcePos {
    /// Create a new source position
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// A single input variable of a Terraform module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name (the block label)
    pub name: String,

    /// Declared type expression, e.g. `map(string)`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub var_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Approximate JSON rendering of the default value.
    ///
    /// Serialized as `null` when the variable has no default.
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// True when no default is given
    pub required: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sensitive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,

    pub pos: SourcePos,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Variable {
    /// Create a required variable with no type, default or validation
    pub fn new(name: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            name: name.into(),
            var_type: String::new(),
            description: String::new(),
            default: None,
            required: true,
            sensitive: false,
            validation: None,
            pos,
        }
    }

    /// Whether the declared type is a map type
    pub fn is_map(&self) -> bool {
        is_map_type(&self.var_type)
    }

    /// Field patterns extracted from the validation condition, if any
    pub fn field_patterns(&self) -> Option<&FieldPatterns> {
        self.validation.as_ref().and_then(|v| v.fields.as_ref())
    }
}

/// Check whether a type expression declares a map
///
/// Matches `map(...)` as well as the legacy bare `map` keyword.
pub fn is_map_type(type_expr: &str) -> bool {
    let type_expr = type_expr.trim();
    type_expr == "map" || type_expr.starts_with("map(")
}

/// A validation block attached to a variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// Condition expression as written in source
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub condition: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,

    /// Field patterns enforced by the condition, omitted when none were found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldPatterns>,
}

impl Validation {
    /// Build a validation record, extracting field patterns from the
    /// `regex(...)` literal of `condition`
    pub fn from_condition(
        condition: impl Into<String>,
        error_message: impl Into<String>,
        is_map: bool,
    ) -> Self {
        let condition = condition.into();
        let fields = return_fields(regex_literal(&condition), is_map);

        Self {
            condition,
            error_message: error_message.into(),
            fields: if fields.is_empty() { None } else { Some(fields) },
        }
    }

    /// Build a validation record from a decoded `validation` block
    pub fn from_hcl(block: HclValidation, is_map: bool) -> Self {
        Self::from_condition(block.condition, block.error_message, is_map)
    }
}

/// Raw attributes of a `validation` block as decoded from HCL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HclValidation {
    pub condition: String,
    pub error_message: String,
}
