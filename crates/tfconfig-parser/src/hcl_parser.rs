//! HCL Parser
//!
//! Provides utilities for reading attributes out of parsed HCL bodies.

use crate::error::{ParseError, Result};
use hcl::{Body, Expression};
use regex::Regex;

/// HCL parser utilities
pub struct HclParser;

impl HclParser {
    /// Parse HCL source into a body
    pub fn parse(source: &str, filename: &str) -> Result<Body> {
        hcl::parse(source).map_err(|source| ParseError::Syntax {
            filename: filename.to_string(),
            source,
        })
    }

    /// Get an attribute expression from a body
    pub fn get_expr<'a>(body: &'a Body, key: &str) -> Option<&'a Expression> {
        body.attributes()
            .find(|attr| attr.key() == key)
            .map(|attr| attr.expr())
    }

    /// Render an expression back to HCL source text.
    ///
    /// String literals come back escaped (`\"`, `\\`), which is the form
    /// validation conditions are analyzed in.
    pub fn expr_to_source(expr: &Expression) -> Result<String> {
        Ok(hcl::format::to_string(expr)?)
    }

    /// Get an optional attribute rendered as source text
    pub fn get_optional_source(body: &Body, key: &str) -> Result<Option<String>> {
        Self::get_expr(body, key)
            .map(Self::expr_to_source)
            .transpose()
    }

    /// Get an optional string attribute.
    ///
    /// Non-literal expressions are returned as source text.
    pub fn get_optional_string(body: &Body, key: &str) -> Result<Option<String>> {
        match Self::get_expr(body, key) {
            Some(Expression::String(s)) => Ok(Some(s.clone())),
            Some(expr) => Self::expr_to_source(expr).map(Some),
            None => Ok(None),
        }
    }

    /// Get an optional boolean literal attribute of `variable`
    pub fn get_optional_bool(body: &Body, key: &str, variable: &str) -> Result<Option<bool>> {
        match Self::get_expr(body, key) {
            Some(Expression::Bool(b)) => Ok(Some(*b)),
            Some(expr) => Err(ParseError::InvalidAttribute {
                variable: variable.to_string(),
                attribute: key.to_string(),
                message: format!("expected a boolean literal, got {}", Self::expr_to_source(expr)?),
            }),
            None => Ok(None),
        }
    }

    /// Convert an expression to an approximate JSON value.
    ///
    /// Literals map directly; other expressions become interpolation strings.
    pub fn to_json(expr: &Expression) -> Option<serde_json::Value> {
        serde_json::to_value(expr).ok()
    }

    /// Keys of all attributes in a body, in source order
    pub fn attribute_keys(body: &Body) -> Vec<&str> {
        body.attributes().map(|attr| attr.key()).collect()
    }

    /// Warnings for attributes not in `known_keys`
    pub fn validate_attributes(body: &Body, known_keys: &[&str], context: &str) -> Vec<String> {
        Self::attribute_keys(body)
            .into_iter()
            .filter(|key| !known_keys.contains(key))
            .map(|key| format!("Unknown attribute '{}' in {}", key, context))
            .collect()
    }

    /// Find the 1-based line of a `<block_type> "<label>"` header.
    ///
    /// Returns 0 when the header cannot be located.
    pub fn find_block_line(source: &str, block_type: &str, label: &str) -> usize {
        let pattern = format!(
            r#"(?m)^[ \t]*{}[ \t]+"?{}"?[ \t]*\{{"#,
            regex::escape(block_type),
            regex::escape(label)
        );

        Regex::new(&pattern)
            .ok()
            .and_then(|re| re.find(source))
            .map(|m| source[..m.start()].matches('\n').count() + 1)
            .unwrap_or(0)
    }
}
