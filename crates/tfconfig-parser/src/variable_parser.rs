//! Variable parser
//!
//! Parses `variable` blocks of Terraform source into [`Variable`] records,
//! including field patterns of their validation conditions.

use crate::error::{ParseError, Result};
use crate::hcl_parser::HclParser;
use hcl::Block;
use tfconfig_core::{HclValidation, SourcePos, Validation, Variable};

const VARIABLE_BLOCK: &str = "variable";
const VALIDATION_BLOCK: &str = "validation";

/// Attributes Terraform accepts in a variable block
const KNOWN_ATTRIBUTES: &[&str] = &[
    "type",
    "description",
    "default",
    "sensitive",
    "nullable",
    "ephemeral",
];

/// Variable parser
pub struct VariableParser;

impl VariableParser {
    /// Parse all variables declared in one source file
    pub fn parse(source: &str, filename: &str) -> Result<Vec<Variable>> {
        let body = HclParser::parse(source, filename)?;

        body.blocks()
            .filter(|block| block.identifier() == VARIABLE_BLOCK)
            .map(|block| Self::parse_block(block, source, filename))
            .collect()
    }

    /// Parse a single `variable` block
    pub fn parse_block(block: &Block, source: &str, filename: &str) -> Result<Variable> {
        let name = block
            .labels()
            .first()
            .map(|label| label.as_str().to_string())
            .ok_or_else(|| ParseError::MissingLabel {
                block: VARIABLE_BLOCK.to_string(),
                pos: SourcePos::new(filename, 0),
            })?;

        let line = HclParser::find_block_line(source, VARIABLE_BLOCK, &name);
        let mut var = Variable::new(name, SourcePos::new(filename, line));
        let body = block.body();

        for warning in HclParser::validate_attributes(
            body,
            KNOWN_ATTRIBUTES,
            &format!("variable '{}'", var.name),
        ) {
            log::warn!("{} ({})", warning, var.pos);
        }

        var.var_type = HclParser::get_optional_source(body, "type")?.unwrap_or_default();
        var.description = HclParser::get_optional_string(body, "description")?.unwrap_or_default();

        if let Some(default) = HclParser::get_expr(body, "default") {
            var.required = false;
            var.default = HclParser::to_json(default);
        }

        var.sensitive = HclParser::get_optional_bool(body, "sensitive", &var.name)?.unwrap_or(false);

        let mut validations = body
            .blocks()
            .filter(|block| block.identifier() == VALIDATION_BLOCK);

        if let Some(validation) = validations.next() {
            var.validation = Some(Self::parse_validation(validation, &var.name, var.is_map())?);
        }

        let ignored = validations.count();
        if ignored > 0 {
            log::warn!(
                "Variable '{}' ({}): only the first validation block is inspected, {} ignored",
                var.name,
                var.pos,
                ignored
            );
        }

        if let Some(fields) = var.field_patterns() {
            log::debug!(
                "Variable '{}': {} field pattern(s) extracted",
                var.name,
                fields.len()
            );
        }

        Ok(var)
    }

    /// Parse a `validation` block of a variable
    pub fn parse_validation(block: &Block, variable: &str, is_map: bool) -> Result<Validation> {
        let body = block.body();

        let condition = HclParser::get_optional_source(body, "condition")?.ok_or_else(|| {
            Self::missing_attribute(variable, "condition")
        })?;
        let error_message = HclParser::get_optional_string(body, "error_message")?
            .ok_or_else(|| Self::missing_attribute(variable, "error_message"))?;

        Ok(Validation::from_hcl(
            HclValidation {
                condition,
                error_message,
            },
            is_map,
        ))
    }

    fn missing_attribute(variable: &str, attribute: &str) -> ParseError {
        ParseError::MissingAttribute {
            variable: variable.to_string(),
            block: VALIDATION_BLOCK.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
