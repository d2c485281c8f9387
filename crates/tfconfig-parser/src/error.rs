//! Parser error types

use std::path::PathBuf;
use thiserror::Error;
use tfconfig_core::SourcePos;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// HCL syntax error in a source file
    #[error("HCL syntax error in {filename}: {source}")]
    Syntax {
        filename: String,
        #[source]
        source: hcl::Error,
    },

    /// HCL formatting or conversion error
    #[error("HCL error: {0}")]
    Hcl(#[from] hcl::Error),

    /// File system error
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Block without its required label
    #[error("{block} block at {pos} is missing its name label")]
    MissingLabel { block: String, pos: SourcePos },

    /// Missing required attribute
    #[error("Missing required attribute '{attribute}' in {block} of variable '{variable}'")]
    MissingAttribute {
        variable: String,
        block: String,
        attribute: String,
    },

    /// Invalid attribute value
    #[error("Invalid value for '{attribute}' of variable '{variable}': {message}")]
    InvalidAttribute {
        variable: String,
        attribute: String,
        message: String,
    },

    /// Variable declared twice in one module
    #[error("Duplicate variable '{name}' declared at {first} and {second}")]
    DuplicateVariable {
        name: String,
        first: SourcePos,
        second: SourcePos,
    },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
