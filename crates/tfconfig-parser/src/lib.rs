//! tfconfig Parser - HCL loader for Terraform module variables
//!
//! This crate reads Terraform source files and produces the records defined
//! in `tfconfig-core`, with field patterns extracted from every variable's
//! validation condition.

pub mod error;
pub mod hcl_parser;
pub mod module_loader;
pub mod variable_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use hcl_parser::HclParser;
pub use module_loader::ModuleLoader;
pub use variable_parser::VariableParser;
