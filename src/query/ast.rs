//! Syntax tree for compiled expressions.

use serde_json::Value;

use super::functions::FunctionRef;

/// One node of a compiled expression
///
/// Every node is evaluated against a "current" value. At the top level the
/// current value is the root document; the right-hand side of a pipe sees
/// the left-hand side's result instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `@`
    Current,
    /// `` `json` `` or `'raw'`
    Literal(Value),
    /// `base.name`, or a bare `name` when the base is `Current`
    FieldAccess(Box<Node>, String),
    /// `base[index]`
    IndexAccess(Box<Node>, i64),
    /// `[a, b, ...]`
    List(Vec<Node>),
    /// `{ key: expr, ... }`
    Object(Vec<(String, Node)>),
    /// `left || right`
    DefaultOr(Box<Node>, Box<Node>),
    /// `left | right`
    Pipe(Box<Node>, Box<Node>),
    /// `name(args...)`, resolved at compile time
    Call(FunctionRef, Vec<Node>),
}

impl Node {
    /// Shorthand for a field lookup on the current value
    pub fn field(name: &str) -> Self {
        Node::FieldAccess(Box::new(Node::Current), name.to_string())
    }
}
