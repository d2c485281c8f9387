//! Records describing an inspected Terraform module
//!
//! This module contains the plain data records produced by module loading:
//! - Variables and their source positions
//! - Validation blocks with extracted field patterns
//! - The module itself

pub mod module;
pub mod variable;

pub use module::Module;
pub use variable::{is_map_type, HclValidation, SourcePos, Validation, Variable};
