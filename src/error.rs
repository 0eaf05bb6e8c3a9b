use std::fmt;

use crate::query::{CompileError, TypeMismatch};

/// Error type for aksfmt operations
#[derive(Debug)]
pub enum AksError {
    /// Expression or projection failed to compile
    Compile(CompileError),
    /// Ad-hoc query failed at evaluation time
    Evaluate(TypeMismatch),
    /// Input document has the wrong shape for the command
    Input(String),
    /// Reading the input failed
    Io(std::io::Error),
    /// JSON parsing or serialization error
    Json(String),
    /// YAML serialization error
    Yaml(String),
}

impl fmt::Display for AksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AksError::Compile(e) => write!(f, "Invalid expression: {}", e),
            AksError::Evaluate(e) => write!(f, "Evaluation failed: {}", e),
            AksError::Input(msg) => write!(f, "Invalid input: {}", msg),
            AksError::Io(e) => write!(f, "Failed to read input: {}", e),
            AksError::Json(msg) => write!(f, "JSON error: {}", msg),
            AksError::Yaml(msg) => write!(f, "YAML error: {}", msg),
        }
    }
}

impl std::error::Error for AksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AksError::Compile(e) => Some(e),
            AksError::Evaluate(e) => Some(e),
            AksError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CompileError> for AksError {
    fn from(err: CompileError) -> Self {
        AksError::Compile(err)
    }
}

impl From<std::io::Error> for AksError {
    fn from(err: std::io::Error) -> Self {
        AksError::Io(err)
    }
}

impl From<serde_json::Error> for AksError {
    fn from(err: serde_json::Error) -> Self {
        AksError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for AksError {
    fn from(err: serde_yml::Error) -> Self {
        AksError::Yaml(err.to_string())
    }
}

/// Result type alias for aksfmt operations
pub type Result<T> = std::result::Result<T, AksError>;
