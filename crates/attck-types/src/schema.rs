//! Schema integration
//!
//! Record validators work with untyped JSON. A [`FieldSchema`] tells them
//! to treat a field as a string and then run its rule. The
//! [`SchemaRegistry`] resolves field types by name.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Id, MitreDomain, MitrePlatform, MitreRelationship, SemVersion};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Validator function stored in a schema
pub type ValidatorFn = fn(&str) -> ValidationResult<String>;

/// Underlying JSON kind a field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseKind {
    String,
}

/// Validator descriptor for one field type
#[derive(Clone, Copy)]
pub struct FieldSchema {
    type_name: &'static str,
    base: BaseKind,
    validator: ValidatorFn,
}

impl FieldSchema {
    pub fn new(type_name: &'static str, validator: ValidatorFn) -> Self {
        Self {
            type_name,
            base: BaseKind::String,
            validator,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn base(&self) -> BaseKind {
        self.base
    }

    /// Run the validator on a string
    pub fn validate_str(&self, raw: &str) -> ValidationResult<String> {
        (self.validator)(raw)
    }

    /// Check a JSON value: must be a string, then must pass the rule
    pub fn check(&self, value: &Value) -> ValidationResult<String> {
        match value {
            Value::String(s) => self.validate_str(s),
            other => {
                let found = json_kind(other);
                tracing::debug!(type_name = self.type_name, found, "type mismatch");
                Err(ValidationError::TypeKindMismatch {
                    type_name: self.type_name,
                    found,
                })
            }
        }
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("type_name", &self.type_name)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field schemas by type name
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, FieldSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five ATT&CK field types
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(SemVersion::schema());
        registry.register(Id::schema());
        registry.register(MitreDomain::schema());
        registry.register(MitrePlatform::schema());
        registry.register(MitreRelationship::schema());
        registry
    }

    /// Add a schema, replacing any previous one with the same name
    pub fn register(&mut self, schema: FieldSchema) -> Option<FieldSchema> {
        self.schemas.insert(schema.type_name(), schema)
    }

    pub fn get(&self, type_name: &str) -> Option<&FieldSchema> {
        self.schemas.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Validate `value` as a field of type `type_name`
    pub fn validate(&self, type_name: &str, value: &Value) -> ValidationResult<String> {
        let schema = self.get(type_name).ok_or_else(|| {
            tracing::warn!(type_name, "no schema registered");
            ValidationError::UnknownFieldType(type_name.to_string())
        })?;
        schema.check(value)
    }
}
