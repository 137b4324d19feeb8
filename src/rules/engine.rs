// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Schema validation engine.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::schema::Schema;

use super::reference::RuleRef;
use super::registry::{integer_arg, RuleRegistry};
use super::validator::ValidationReport;

/// Value used for fields missing from the input.
static ABSENT: Value = Value::Null;

/// Validate an object against a schema using the built-in rules.
pub fn validate_object(obj: &Map<String, Value>, schema: &Schema) -> ValidationReport {
    SchemaValidator::default().validate(obj, schema)
}

/// Applies schemas to objects using an injected rule registry.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'r> {
    registry: &'r RuleRegistry,
}

impl Default for SchemaValidator<'static> {
    fn default() -> Self {
        Self::new(RuleRegistry::shared())
    }
}

impl<'r> SchemaValidator<'r> {
    /// Create a validator backed by the given registry.
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// The registry rules are resolved against.
    pub fn registry(&self) -> &RuleRegistry {
        self.registry
    }

    /// Validate an object.
    ///
    /// Every rule of every field runs, in declaration order. Fields missing
    /// from `obj` are validated as null.
    pub fn validate(&self, obj: &Map<String, Value>, schema: &Schema) -> ValidationReport {
        let mut errors = Vec::with_capacity(schema.len());

        for field in schema.fields() {
            let value = obj.get(&field.name).unwrap_or(&ABSENT);

            let codes: Vec<String> = field
                .rules
                .iter()
                .filter_map(|rule| self.registry.dispatch(value, rule))
                .inspect(|code| tracing::trace!(field = %field.name, %code, "Rule failed"))
                .collect();

            errors.push((field.name.clone(), codes));
        }

        let report = ValidationReport::from_errors(errors);
        tracing::debug!(
            fields = schema.len(),
            valid = report.is_valid(),
            errors = report.error_count(),
            "Validated object"
        );
        report
    }

    /// Validate any JSON value. Non-objects have no fields.
    pub fn validate_value(&self, value: &Value, schema: &Schema) -> ValidationReport {
        match value {
            Value::Object(obj) => self.validate(obj, schema),
            _ => self.validate(&Map::new(), schema),
        }
    }

    /// Reject schemas that reference rules this validator cannot run.
    ///
    /// Validation itself ignores such references; call this first to fail
    /// fast on typos instead.
    pub fn check_schema(&self, schema: &Schema) -> Result<()> {
        for field in schema.fields() {
            for rule in &field.rules {
                self.check_rule(&field.name, rule)?;
            }
        }
        Ok(())
    }

    fn check_rule(&self, field: &str, rule: &RuleRef) -> std::result::Result<(), SchemaError> {
        match rule {
            RuleRef::Custom(_) => Ok(()),
            RuleRef::Named(name) => {
                if self.registry.contains(name) {
                    Ok(())
                } else {
                    Err(SchemaError::UnknownRule {
                        field: field.to_string(),
                        rule: name.clone(),
                    })
                }
            }
            RuleRef::Parameterized { name, arg } => {
                if !self.registry.contains_parameterized(name) {
                    return Err(SchemaError::UnknownRule {
                        field: field.to_string(),
                        rule: name.clone(),
                    });
                }
                if integer_arg(arg).is_none() {
                    return Err(SchemaError::InvalidArgument {
                        field: field.to_string(),
                        rule: name.clone(),
                        arg: arg.to_string(),
                    });
                }
                Ok(())
            }
            RuleRef::Unrecognized(raw) => Err(SchemaError::MalformedRule {
                field: field.to_string(),
                raw: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FcError;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    fn demo_schema() -> Schema {
        Schema::from_json_value(&json!({
            "name": ["required"],
            "email": ["required", "email"],
            "phone": ["phone"],
            "password": ["required", {"name": "minLength", "arg": 8}, "strongPassword"]
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_schema_is_valid() {
        let report = validate_object(&object(json!({"anything": 1})), &Schema::new());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_demo_valid_input() {
        let input = object(json!({
            "name": "Alice Example",
            "email": "alice@example.com",
            "phone": "+1 (555) 123-4567",
            "password": "Secur3$Pass!"
        }));
        let report = validate_object(&input, &demo_schema());
        assert_eq!(report, ValidationReport::valid());
    }

    #[test]
    fn test_demo_invalid_input() {
        let input = object(json!({
            "name": " ",
            "email": "not-an-email",
            "phone": "123",
            "password": "weak"
        }));
        let report = validate_object(&input, &demo_schema());

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 4);
        assert_eq!(report.field_errors("name"), ["required"]);
        assert_eq!(report.field_errors("email"), ["invalid_email"]);
        assert_eq!(report.field_errors("phone"), ["invalid_phone"]);
        assert_eq!(
            report.field_errors("password"),
            ["min_length_8", "weak_password"]
        );

        // Report follows schema order, not name order
        let fields: Vec<&str> = report.failed_fields().collect();
        assert_eq!(fields, vec!["name", "email", "phone", "password"]);
    }

    #[test]
    fn test_min_length_written_as_float_in_schema() {
        let schema =
            Schema::from_json_str(r#"{"password": [{"name": "minLength", "arg": 8.0}]}"#).unwrap();
        let report = validate_object(&object(json!({"password": "abc"})), &schema);
        assert_eq!(report.field_errors("password"), ["min_length_8"]);
        assert!(SchemaValidator::default().check_schema(&schema).is_ok());
    }

    #[test]
    fn test_missing_fields_are_validated_as_absent() {
        let report = validate_object(&Map::new(), &demo_schema());
        assert_eq!(report.field_errors("name"), ["required"]);
        assert_eq!(report.field_errors("email"), ["required", "invalid_email"]);
        assert_eq!(report.field_errors("phone"), ["invalid_phone"]);
        assert_eq!(
            report.field_errors("password"),
            ["required", "min_length_8", "weak_password"]
        );
    }

    #[test]
    fn test_no_short_circuit_and_rule_order() {
        let schema = Schema::new().field(
            "code",
            vec![
                RuleRef::named("strongPassword"),
                RuleRef::custom(|_: &Value| false),
                RuleRef::min_length(20),
            ],
        );
        let report = validate_object(&object(json!({"code": "x"})), &schema);
        assert_eq!(
            report.field_errors("code"),
            ["weak_password", "invalid", "min_length_20"]
        );
    }

    #[test]
    fn test_fields_not_in_schema_are_ignored() {
        let schema = Schema::new().field("name", ["required"]);
        let report = validate_object(&object(json!({"name": "a", "extra": null})), &schema);
        assert!(report.is_valid());
    }

    #[test]
    fn test_unknown_rules_pass_during_validation() {
        let schema = Schema::from_json_value(&json!({"email": ["emial", 42]})).unwrap();
        let report = validate_object(&Map::new(), &schema);
        assert!(report.is_valid());
    }

    #[test]
    fn test_validate_value_non_object() {
        let schema = Schema::new().field("name", ["required"]);
        let report = SchemaValidator::default().validate_value(&json!("just a string"), &schema);
        assert_eq!(report.field_errors("name"), ["required"]);
    }

    #[test]
    fn test_injected_registry() {
        let mut registry = RuleRegistry::new();
        registry.register("even", "not_even", |v: &Value| {
            v.as_u64().is_some_and(|n| n % 2 == 0)
        });
        let validator = SchemaValidator::new(&registry);

        // Built-ins are not in this registry, so "required" is ignored
        let schema = Schema::new().field("n", ["even", "required"]);
        let report = validator.validate(&object(json!({"n": 3})), &schema);
        assert_eq!(report.field_errors("n"), ["not_even"]);
    }

    #[test]
    fn test_check_schema_accepts_known_rules() {
        let validator = SchemaValidator::default();
        assert!(validator.check_schema(&demo_schema()).is_ok());

        let with_custom = Schema::new().field("x", vec![RuleRef::custom(|_: &Value| true)]);
        assert!(validator.check_schema(&with_custom).is_ok());
    }

    #[test]
    fn test_check_schema_unknown_rule() {
        let schema = Schema::new().field("email", ["required", "emial"]);
        let err = SchemaValidator::default().check_schema(&schema).unwrap_err();
        match err {
            FcError::Schema(SchemaError::UnknownRule { field, rule }) => {
                assert_eq!(field, "email");
                assert_eq!(rule, "emial");
            }
            other => panic!("Expected UnknownRule, got {:?}", other),
        }
    }

    #[test]
    fn test_check_schema_bad_argument() {
        let schema = Schema::from_json_value(&json!({
            "password": [{"name": "minLength", "arg": "eight"}]
        }))
        .unwrap();
        let err = SchemaValidator::default().check_schema(&schema).unwrap_err();
        assert!(matches!(
            err,
            FcError::Schema(SchemaError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_check_schema_malformed_rule() {
        let schema = Schema::from_json_value(&json!({"age": [{"min": 18}]})).unwrap();
        let err = SchemaValidator::default().check_schema(&schema).unwrap_err();
        assert!(matches!(err, FcError::Schema(SchemaError::MalformedRule { .. })));
    }

    #[test]
    fn test_check_schema_unknown_parameterized_rule() {
        let schema = Schema::new().field("bio", vec![RuleRef::parameterized("maxLength", 10)]);
        let err = SchemaValidator::default().check_schema(&schema).unwrap_err();
        assert!(err.to_string().contains("maxLength"));
    }
}
