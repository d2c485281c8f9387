//! Unit tests for the variable parser
//!
//! Tests decoding of variable blocks and the field patterns attached to their
//! validation blocks.

use tfconfig_parser::*;

const PERSON: &str = r##"
variable "person" {
  type        = object({ name = string, age = number })
  description = "A person record."

  validation {
    condition     = can(regex("^\\{\"name\":\"[a-z]+\"(,)?\"age\":\"[0-9]+\"\\}$", jsonencode(var.person)))
    error_message = "Name must be lowercase and age numeric."
  }
}
"##;

// =============================================================================
// Variable attributes
// =============================================================================

#[test]
fn test_parse_object_variable() {
    let vars = VariableParser::parse(PERSON, "variables.tf").unwrap();
    assert_eq!(vars.len(), 1);

    let var = &vars[0];
    assert_eq!(var.name, "person");
    assert!(var.var_type.starts_with("object("));
    assert_eq!(var.description, "A person record.");
    assert!(var.required);
    assert!(!var.sensitive);
    assert!(!var.is_map());
    assert_eq!(var.pos.filename, "variables.tf");
    assert_eq!(var.pos.line, 2);
}

#[test]
fn test_parse_default_and_sensitive() {
    let source = r#"
variable "port" {
  type      = number
  default   = 8080
  sensitive = true
}

variable "region" {
  default = "us-east-1"
}
"#;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    assert_eq!(vars.len(), 2);

    let port = &vars[0];
    assert_eq!(port.var_type, "number");
    assert!(!port.required);
    assert!(port.sensitive);
    assert_eq!(port.default.as_ref().and_then(|v| v.as_u64()), Some(8080));
    assert_eq!(port.pos.line, 2);

    let region = &vars[1];
    assert!(region.var_type.is_empty());
    assert_eq!(
        region.default.as_ref().and_then(|v| v.as_str()),
        Some("us-east-1")
    );
    assert_eq!(region.pos.line, 8);
}

#[test]
fn test_parse_unknown_attribute_is_not_an_error() {
    let source = "variable \"name\" {\n  defualt = \"x\"\n}\n";
    let vars = VariableParser::parse(source, "main.tf").unwrap();

    assert_eq!(vars.len(), 1);
    assert!(vars[0].required);
}

#[test]
fn test_parse_syntax_error() {
    let result = VariableParser::parse("variable \"broken\" {\n  type = \n", "broken.tf");
    assert!(matches!(result, Err(ParseError::Syntax { .. })));
}

// =============================================================================
// Validation field patterns
// =============================================================================

#[test]
fn test_parse_validation_fields() {
    let vars = VariableParser::parse(PERSON, "variables.tf").unwrap();
    let validation = vars[0].validation.as_ref().expect("validation block");

    assert_eq!(
        validation.error_message,
        "Name must be lowercase and age numeric."
    );
    assert!(validation.condition.contains("jsonencode(var.person)"));

    let fields = validation.fields.as_ref().expect("field patterns");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("name").map(String::as_str), Some("^[a-z]+$"));
    assert_eq!(fields.get("age").map(String::as_str), Some("^[0-9]+$"));
}

#[test]
fn test_parse_nested_validation_fields() {
    let source = r##"
variable "service" {
  type = object({ name = string, owner = object({ team = string, id = number }) })

  validation {
    condition     = can(regex("^\\{\"name\":\"[a-z-]+\"(,)?\"owner\":\\{\"team\":\"[a-z]+\"(,)?\"id\":[0-9]+\\}\\}$", jsonencode(var.service)))
    error_message = "Invalid service."
  }
}
"##;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    let fields = vars[0].field_patterns().expect("field patterns");

    assert_eq!(fields.get("name").map(String::as_str), Some("^[a-z-]+$"));
    assert_eq!(fields.get("owner__team").map(String::as_str), Some("^[a-z]+$"));
}

#[test]
fn test_parse_map_validation_fields() {
    let source = r##"
variable "labels" {
  type    = map(string)
  default = { app = "web" }

  validation {
    condition     = can(regex("^\\{\"app\":\"[a-z]+\"(,)?\"tier\":\"(web|db)\"\\}$", jsonencode(var.labels)))
    error_message = "Invalid labels."
  }
}
"##;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    let var = &vars[0];

    assert!(var.is_map());
    assert!(!var.required);
    assert!(var.default.as_ref().is_some_and(|v| v.is_object()));

    let fields = var.field_patterns().expect("field patterns");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get("mapValue").map(String::as_str), Some("^(web|db)$"));
}

#[test]
fn test_parse_validation_regex_after_other_calls() {
    let source = r##"
variable "labels" {
  type = map(string)

  validation {
    condition     = contains(["a", "b"], "a") && can(regex("^\\{\"env\":\"(dev|prod)\"\\}$", jsonencode(var.labels)))
    error_message = "Invalid labels."
  }
}
"##;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    let fields = vars[0].field_patterns().expect("field patterns");

    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get("mapValue").map(String::as_str), Some("^(dev|prod)$"));
}

#[test]
fn test_parse_validation_without_regex() {
    let source = r#"
variable "name" {
  validation {
    condition     = length(var.name) > 3
    error_message = "Name too short."
  }
}
"#;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    let validation = vars[0].validation.as_ref().expect("validation block");

    assert!(validation.fields.is_none());
    assert!(vars[0].field_patterns().is_none());
}

#[test]
fn test_parse_only_first_validation_block() {
    let source = r##"
variable "code" {
  validation {
    condition     = can(regex("\"code\":\"[A-Z]{3}\"", jsonencode(var.code)))
    error_message = "First."
  }

  validation {
    condition     = length(var.code) == 3
    error_message = "Second."
  }
}
"##;
    let vars = VariableParser::parse(source, "main.tf").unwrap();
    let validation = vars[0].validation.as_ref().expect("validation block");

    assert_eq!(validation.error_message, "First.");
    assert_eq!(
        validation.fields.as_ref().and_then(|f| f.get("code")).map(String::as_str),
        Some("^[A-Z]{3}$")
    );
}

#[test]
fn test_parse_validation_requires_error_message() {
    let source = r#"
variable "name" {
  validation {
    condition = length(var.name) > 3
  }
}
"#;
    let err = VariableParser::parse(source, "main.tf").unwrap_err();
    match err {
        ParseError::MissingAttribute {
            variable,
            block,
            attribute,
        } => {
            assert_eq!(variable, "name");
            assert_eq!(block, "validation");
            assert_eq!(attribute, "error_message");
        }
        other => panic!("Expected MissingAttribute, got {:?}", other),
    }
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn test_variable_json_shape() {
    let vars = VariableParser::parse(PERSON, "variables.tf").unwrap();
    let json = serde_json::to_value(&vars[0]).unwrap();

    assert_eq!(json["name"], "person");
    assert!(json["default"].is_null());
    assert_eq!(json["required"], true);
    assert!(json.get("sensitive").is_none());
    assert_eq!(json["validation"]["fields"]["age"], "^[0-9]+$");
    assert_eq!(json["pos"]["line"], 2);
}
