//! Function table for call expressions.
//!
//! Functions are looked up by name when an expression is compiled, so an
//! unknown name or a wrong argument count never survives to evaluation.
//! The default table holds `sort` and `join`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Number, Value};

use super::error::{EvalResult, TypeMismatch};
use crate::document::{Document, DocumentExt, Kind};

/// A pure function callable from an expression
pub trait Function: Send + Sync {
    /// Name used in call syntax
    fn name(&self) -> &str;

    /// Exact number of arguments
    fn arity(&self) -> usize;

    /// Invoke with already-evaluated arguments. `args.len()` always equals
    /// `arity()`.
    fn call(&self, args: &[Document]) -> EvalResult<Document>;
}

/// Shared handle to a resolved function, stored in compiled expressions
#[derive(Clone)]
pub struct FunctionRef(Arc<dyn Function>);

impl FunctionRef {
    pub fn new(function: impl Function + 'static) -> Self {
        Self(Arc::new(function))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn arity(&self) -> usize {
        self.0.arity()
    }

    pub fn call(&self, args: &[Document]) -> EvalResult<Document> {
        self.0.call(args)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity())
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.arity() == other.arity()
    }
}

/// Name-to-function mapping consulted by the compiler
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionRef>,
}

impl FunctionRegistry {
    /// A registry with no functions at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard table: `sort(array)` and `join(separator, array)`
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Sort);
        registry.register(Join);
        registry
    }

    /// Add a function, replacing any previous one with the same name
    pub fn register(&mut self, function: impl Function + 'static) {
        let function = FunctionRef::new(function);
        self.functions.insert(function.name().to_string(), function);
    }

    pub fn resolve(&self, name: &str) -> Option<FunctionRef> {
        self.functions.get(name).cloned()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// `sort(@)`: ascending sort of an all-number or all-string array
pub struct Sort;

impl Function for Sort {
    fn name(&self) -> &str {
        "sort"
    }

    fn arity(&self) -> usize {
        1
    }

    fn call(&self, args: &[Document]) -> EvalResult<Document> {
        const EXPECTED: &str = "array of numbers or strings";

        let items = match args.first() {
            None | Some(Value::Null) => return Ok(Value::Null),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(TypeMismatch::new(self.name(), EXPECTED, other.kind())),
        };

        let element_kind = match items.first() {
            None => return Ok(Value::Array(Vec::new())),
            Some(first) => first.kind(),
        };
        if !matches!(element_kind, Kind::Number | Kind::String) {
            return Err(TypeMismatch::new(self.name(), EXPECTED, element_kind));
        }
        if let Some(odd) = items.iter().find(|item| item.kind() != element_kind) {
            return Err(TypeMismatch::new(self.name(), EXPECTED, odd.kind()));
        }

        let mut sorted = items.clone();
        sorted.sort_by(compare_scalars);
        Ok(Value::Array(sorted))
    }
}

/// Order two values of the same scalar kind
fn compare_scalars(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Integers compare exactly; f64 is only used when either side is fractional
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    match (a.is_f64() || b.is_f64(), a.as_i64(), b.as_i64()) {
        // One side negative, the other beyond i64::MAX
        (false, Some(_), None) => Ordering::Less,
        (false, None, Some(_)) => Ordering::Greater,
        _ => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
    }
}

/// `join(separator, @)`: concatenate an array of strings
pub struct Join;

impl Function for Join {
    fn name(&self) -> &str {
        "join"
    }

    fn arity(&self) -> usize {
        2
    }

    fn call(&self, args: &[Document]) -> EvalResult<Document> {
        const EXPECTED: &str = "array of strings";

        let separator = match args.first() {
            Some(Value::String(s)) => s.as_str(),
            Some(other) => return Err(TypeMismatch::new(self.name(), "string separator", other.kind())),
            None => return Err(TypeMismatch::new(self.name(), "string separator", Kind::Null)),
        };

        let items = match args.get(1) {
            None | Some(Value::Null) => return Ok(Value::Null),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(TypeMismatch::new(self.name(), EXPECTED, other.kind())),
        };

        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => parts.push(s.as_str()),
                other => return Err(TypeMismatch::new(self.name(), EXPECTED, other.kind())),
            }
        }

        Ok(Value::String(parts.join(separator)))
    }
}
