//! Path-expression language
//!
//! A small JMESPath-flavoured language used to project cluster documents
//! into table rows. Supported syntax:
//!
//! - field access `a.b.c` and quoted fields `"odd key"`
//! - index access `a[0]` (negative or out-of-range indices are absent)
//! - literals `` `json` `` and raw strings `'text'`
//! - current value `@`
//! - default-or `x || y` and pipe `x | y`
//! - multiselect `[a, b]` and `{k: a, ...}`
//! - function calls `sort(@)` and `join(sep, @)`
//!
//! # Example
//!
//! ```rust
//! use aksfmt::query::compile;
//! use serde_json::json;
//!
//! let expr = compile("upgrades || [`None available`] | sort(@) | join(`, `, @)").unwrap();
//! let doc = json!({"upgrades": ["1.9.1", "1.8.6"]});
//! assert_eq!(expr.evaluate(&doc).unwrap(), json!("1.8.6, 1.9.1"));
//! ```

mod ast;
mod error;
mod eval;
mod functions;
mod lexer;
mod parser;

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::document::Document;
use crate::projection::ProjectionSpec;

pub use ast::Node;
pub use error::{CompileError, EvalResult, TypeMismatch};
pub use eval::evaluate;
pub use functions::{Function, FunctionRef, FunctionRegistry, Join, Sort};

use parser::Parser;

/// A compiled, reusable, side-effect-free expression
#[derive(Debug, Clone)]
pub struct Expression {
    source: Arc<str>,
    node: Node,
}

impl Expression {
    /// Source text the expression was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root of the syntax tree
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Evaluate against a root document. Never mutates `root`.
    pub fn evaluate(&self, root: &Document) -> EvalResult<Document> {
        evaluate(self, root)
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Compiles expression strings against a function table
#[derive(Debug, Clone)]
pub struct Compiler {
    functions: FunctionRegistry,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// Compiler with the builtin `sort` and `join`
    pub fn new() -> Self {
        Self::with_functions(FunctionRegistry::builtin())
    }

    pub fn with_functions(functions: FunctionRegistry) -> Self {
        Self { functions }
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Compile a single expression
    pub fn compile(&self, source: &str) -> Result<Expression, CompileError> {
        debug!("Compiling expression: {}", source);
        let node = Parser::new(source, &self.functions)?.parse()?;
        Ok(Expression {
            source: Arc::from(source),
            node,
        })
    }

    /// Compile a `{ name: expression, ... }` projection
    pub fn compile_projection(&self, source: &str) -> Result<ProjectionSpec, CompileError> {
        debug!("Compiling projection: {}", source.trim());
        let entries = Parser::new(source, &self.functions)?.parse_projection()?;
        let fields = entries
            .into_iter()
            .map(|entry| {
                let expression = Expression {
                    source: Arc::from(source[entry.span].trim()),
                    node: entry.node,
                };
                (entry.key, expression)
            })
            .collect();
        Ok(ProjectionSpec::build(fields))
    }
}

/// Compile with the builtin function table
pub fn compile(source: &str) -> Result<Expression, CompileError> {
    Compiler::new().compile(source)
}

/// Compile a projection with the builtin function table
pub fn compile_projection(source: &str) -> Result<ProjectionSpec, CompileError> {
    Compiler::new().compile_projection(source)
}
