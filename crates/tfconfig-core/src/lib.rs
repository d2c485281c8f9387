//! tfconfig Core - Core types and validation analysis for Terraform module inspection
//!
//! This crate provides the fundamental pieces used across the tfconfig workspace:
//! - Variable, validation and module records
//! - Field-pattern extraction from variable validation conditions
//! - Small text helpers for delimiter-based extraction

pub mod condition;
pub mod types;

// Re-export commonly used items
pub use condition::{between, return_fields, FieldPatterns, MAP_FIELD_NAME};
pub use types::{HclValidation, Module, SourcePos, Validation, Variable};
