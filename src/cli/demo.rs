// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Sample schema and inputs for the `demo` command.

use serde_json::{json, Map, Value};

use crate::rules::RuleRef;
use crate::schema::Schema;

/// A signup form: name, email, phone and password.
pub fn demo_schema() -> Schema {
    Schema::new()
        .field("name", ["required"])
        .field("email", ["required", "email"])
        .field("phone", ["phone"])
        .field(
            "password",
            [
                RuleRef::named("required"),
                RuleRef::min_length(8),
                RuleRef::named("strongPassword"),
            ],
        )
}

/// Input that passes every rule of [`demo_schema`].
pub fn valid_input() -> Map<String, Value> {
    into_object(json!({
        "name": "Alice Example",
        "email": "alice@example.com",
        "phone": "+1 (555) 123-4567",
        "password": "Secur3$Pass!"
    }))
}

/// Input that fails at least one rule on every field.
pub fn invalid_input() -> Map<String, Value> {
    into_object(json!({
        "name": " ",
        "email": "not-an-email",
        "phone": "123",
        "password": "weak"
    }))
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::validate_object;

    #[test]
    fn test_demo_inputs() {
        let schema = demo_schema();
        assert!(validate_object(&valid_input(), &schema).is_valid());

        let report = validate_object(&invalid_input(), &schema);
        assert_eq!(report.errors().len(), 4);
        assert_eq!(
            report.field_errors("password"),
            ["min_length_8", "weak_password"]
        );
    }
}
