// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Schema definitions.
//!
//! A schema maps field names to ordered rule lists. Schemas can be built in
//! code or loaded from a JSON document of the form
//!
//! ```json
//! {
//!   "email": ["required", "email"],
//!   "password": ["required", {"name": "minLength", "arg": 8}]
//! }
//! ```

use serde_json::Value;
use std::path::Path;

use crate::error::{FcError, Result, SchemaError};
use crate::rules::RuleRef;

/// The ordered rules for one field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Field name in the input object.
    pub name: String,
    /// Rules, evaluated in order.
    pub rules: Vec<RuleRef>,
}

/// A mapping from field name to rules, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing the rules of an existing field with that name.
    pub fn field<I, R>(mut self, name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RuleRef>,
    {
        self.insert(name, rules.into_iter().map(Into::into).collect());
        self
    }

    /// Set the rules for a field.
    ///
    /// A new field is appended; an existing one keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<RuleRef>) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.rules = rules,
            None => self.fields.push(FieldSchema { name, rules }),
        }
    }

    /// Look up a field's rules.
    pub fn get(&self, name: &str) -> Option<&[RuleRef]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_slice())
    }

    /// Iterate over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a schema from a parsed JSON document.
    pub fn from_json_value(doc: &Value) -> Result<Self> {
        let Value::Object(map) = doc else {
            return Err(parse_error("schema must be a JSON object"));
        };

        let mut schema = Schema::new();
        for (name, rules) in map {
            let rules: Vec<RuleRef> = match rules {
                Value::Array(entries) => entries.iter().map(RuleRef::from_json).collect(),
                Value::Null => Vec::new(),
                other => {
                    return Err(parse_error(format!(
                        "rules for field '{}' must be an array, found {}",
                        name,
                        json_type_name(other)
                    )))
                }
            };
            schema.insert(name.clone(), rules);
        }

        Ok(schema)
    }

    /// Parse a schema from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(content)
            .map_err(|e| parse_error(format!("invalid JSON: {}", e)))?;
        Self::from_json_value(&doc)
    }

    /// Load a schema from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading schema from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| FcError::WithContext {
            context: format!("reading schema {}", path.display()),
            message: e.to_string(),
        })?;

        Self::from_json_str(&content)
    }
}

fn parse_error(message: impl Into<String>) -> FcError {
    FcError::Schema(SchemaError::Parse {
        message: message.into(),
    })
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_preserves_order() {
        let schema = Schema::new()
            .field("name", ["required"])
            .field("email", ["required", "email"])
            .field("age", Vec::<RuleRef>::new());

        let names: Vec<&str> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "age"]);
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.get("email").map(<[RuleRef]>::len), Some(2));
    }

    #[test]
    fn test_redefining_field_replaces_rules() {
        let schema = Schema::new()
            .field("a", ["required"])
            .field("b", ["phone"])
            .field("a", ["email", "phone"]);

        let names: Vec<&str> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(schema.get("a").map(<[RuleRef]>::len), Some(2));
    }

    #[test]
    fn test_from_json_value() {
        let doc = json!({
            "password": ["required", {"name": "minLength", "arg": 8}, "strongPassword"],
            "name": ["required"],
            "nickname": null
        });
        let schema = Schema::from_json_value(&doc).unwrap();

        // File order is kept, not sorted
        let names: Vec<&str> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["password", "name", "nickname"]);

        let password = schema.get("password").unwrap();
        assert!(matches!(password[1], RuleRef::Parameterized { .. }));
        assert!(schema.get("nickname").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Schema::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, FcError::Schema(SchemaError::Parse { .. })));
    }

    #[test]
    fn test_from_json_rejects_non_array_rules() {
        let err = Schema::from_json_str(r#"{"email": "email"}"#).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn test_from_json_invalid_json() {
        let err = Schema::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Schema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, FcError::WithContext { .. }));
    }
}
