//! Error types for the expression language.

use thiserror::Error;

use crate::document::Kind;

/// Raised when an expression string cannot be compiled.
///
/// Every variant carries the byte offset into the source where the problem
/// was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("unterminated {what} starting at position {position}")]
    Unterminated { what: &'static str, position: usize },

    #[error("invalid {what} at position {position}: {message}")]
    InvalidToken {
        what: &'static str,
        message: String,
        position: usize,
    },

    #[error("unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: usize,
    },

    #[error("unexpected end of expression at position {position}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },

    #[error("unknown function '{name}' at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("function '{name}' takes {expected} argument(s), got {found} at position {position}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
        position: usize,
    },

    #[error("duplicate key '{key}' at position {position}")]
    DuplicateKey { key: String, position: usize },

    #[error("projection must be a {{ key: expression, ... }} object, found {found} at position {position}")]
    NotAProjection { found: String, position: usize },
}

impl CompileError {
    /// Byte offset of the offending token
    pub fn position(&self) -> usize {
        match self {
            CompileError::UnexpectedCharacter { position, .. }
            | CompileError::Unterminated { position, .. }
            | CompileError::InvalidToken { position, .. }
            | CompileError::UnexpectedToken { position, .. }
            | CompileError::UnexpectedEnd { position, .. }
            | CompileError::UnknownFunction { position, .. }
            | CompileError::Arity { position, .. }
            | CompileError::DuplicateKey { position, .. }
            | CompileError::NotAProjection { position, .. } => *position,
        }
    }
}

/// Raised when a function receives an argument of the wrong runtime shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid type for {function}(): expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub function: String,
    pub expected: &'static str,
    pub found: Kind,
}

impl TypeMismatch {
    pub fn new(function: &str, expected: &'static str, found: Kind) -> Self {
        Self {
            function: function.to_string(),
            expected,
            found,
        }
    }
}

impl serde::Serialize for TypeMismatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, TypeMismatch>;
