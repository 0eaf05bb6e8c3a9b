//! Tree-walking evaluator.
//!
//! Absent paths never fail: they evaluate to null. The only runtime error
//! is a `TypeMismatch` raised by a function that was handed the wrong shape.

use serde_json::{Map, Value};

use super::ast::Node;
use super::error::EvalResult;
use super::Expression;
use crate::document::{Document, DocumentExt};

/// Evaluate a compiled expression against a root document
pub fn evaluate(expression: &Expression, root: &Document) -> EvalResult<Document> {
    visit(expression.node(), root)
}

/// Evaluate `node` with `current` as the value `@` refers to
pub(crate) fn visit(node: &Node, current: &Value) -> EvalResult<Value> {
    match node {
        Node::Current => Ok(current.clone()),

        Node::Literal(value) => Ok(value.clone()),

        Node::FieldAccess(base, name) => {
            let base = visit(base, current)?;
            Ok(base.field(name).cloned().unwrap_or(Value::Null))
        }

        Node::IndexAccess(base, index) => {
            let base = visit(base, current)?;
            Ok(base.at(*index).cloned().unwrap_or(Value::Null))
        }

        Node::List(items) => {
            if current.is_null() {
                return Ok(Value::Null);
            }
            items
                .iter()
                .map(|item| visit(item, current))
                .collect::<EvalResult<Vec<_>>>()
                .map(Value::Array)
        }

        Node::Object(entries) => {
            if current.is_null() {
                return Ok(Value::Null);
            }
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key.clone(), visit(value, current)?);
            }
            Ok(Value::Object(map))
        }

        Node::DefaultOr(left, right) => {
            let left = visit(left, current)?;
            if left.is_absent() {
                visit(right, current)
            } else {
                Ok(left)
            }
        }

        Node::Pipe(left, right) => {
            let left = visit(left, current)?;
            visit(right, &left)
        }

        Node::Call(function, args) => {
            let args = args
                .iter()
                .map(|arg| visit(arg, current))
                .collect::<EvalResult<Vec<_>>>()?;
            function.call(&args)
        }
    }
}
