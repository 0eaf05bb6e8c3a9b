//! Projection specs and the records they produce

use log::warn;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::document::Document;
use crate::query::{self, CompileError, Expression, TypeMismatch};

/// Ordered set of named expressions describing one output record shape
///
/// Built once and applied to many documents. Field order here is the column
/// order of every record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSpec {
    fields: Vec<(String, Expression)>,
}

impl ProjectionSpec {
    /// Assemble a spec from already-compiled expressions
    pub fn build(fields: Vec<(String, Expression)>) -> Self {
        Self { fields }
    }

    /// Compile a `{ name: expression, ... }` projection with the builtin functions
    pub fn compile(source: &str) -> Result<Self, CompileError> {
        query::compile_projection(source)
    }

    pub fn fields(&self) -> &[(String, Expression)] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Evaluate every field against the same root document
    ///
    /// Fields are independent: a field that fails with a type mismatch keeps
    /// its error and the remaining fields are still produced.
    pub fn apply(&self, document: &Document) -> Record {
        let fields = self
            .fields
            .iter()
            .map(|(name, expression)| {
                let value = expression.evaluate(document);
                if let Err(e) = &value {
                    warn!("Field '{}' ({}) failed: {}", name, expression, e);
                }
                Field {
                    name: name.clone(),
                    value,
                }
            })
            .collect();
        Record { fields }
    }
}

/// One named cell of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Result<Document, TypeMismatch>,
}

impl Field {
    /// The value, or null when evaluation failed
    pub fn value_or_null(&self) -> Document {
        self.value.clone().unwrap_or(Value::Null)
    }
}

/// Flat, ordered output of applying a projection spec to one document
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Successfully evaluated value of a field
    pub fn value(&self, name: &str) -> Option<&Document> {
        self.field(name).and_then(|f| f.value.as_ref().ok())
    }

    /// Fields whose evaluation failed
    pub fn errors(&self) -> impl Iterator<Item = (&str, &TypeMismatch)> {
        self.fields
            .iter()
            .filter_map(|f| f.value.as_ref().err().map(|e| (f.name.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ordered object view; failed fields become null
    pub fn to_document(&self) -> Document {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value_or_null()))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            match &field.value {
                Ok(value) => map.serialize_entry(&field.name, value)?,
                Err(_) => map.serialize_entry(&field.name, &Value::Null)?,
            }
        }
        map.end()
    }
}
