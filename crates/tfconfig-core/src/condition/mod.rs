//! Validation Condition Module
//!
//! This module extracts field-level regex constraints from the text of a
//! variable `validation` condition. It is used by:
//! - The HCL loader (attaching `fields` to each decoded validation block)
//! - Static-analysis consumers that only hold the raw condition text
//!
//! The extractor does not understand the Terraform expression language. It
//! works on the condition as written in source, where a JSON-shaped regex is
//! matched against `jsonencode(var.x)`:
//!
//! ```hcl
//! condition = can(regex("^\\{\"name\":\"[a-z]+\"(,)?\"age\":\"[0-9]+\"\\}$", jsonencode(var.person)))
//! ```
//!
//! # Markers
//!
//! - `(,)?` separates clauses, one field per clause
//! - `\{` opens a nested object scope named by the preceding quoted key
//! - `\}` closes the innermost scope
//! - `\"` quotes field names and patterns
//! - `\[` starts an array pattern
//!
//! Nested names are joined with `__` (`inner__leaf`). For `map(...)` variables
//! every field collapses to [`MAP_FIELD_NAME`].

mod fields;
mod text;

pub use fields::{return_fields, FieldPatterns, MAP_FIELD_NAME};
pub use text::{between, regex_literal};
