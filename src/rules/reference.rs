// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule references.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A predicate over a single value, used for custom rules.
pub trait Predicate: Send + Sync {
    /// Return `true` if the value passes.
    fn test(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn test(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A reference to one rule inside a field's rule list.
#[derive(Clone)]
pub enum RuleRef {
    /// A rule looked up by name, e.g. `"required"`.
    Named(String),

    /// A rule looked up by name that takes an argument, e.g. `minLength` with `8`.
    Parameterized { name: String, arg: Value },

    /// An inline predicate. Fails with the generic `invalid` code.
    Custom(Arc<dyn Predicate>),

    /// Any other shape found in a schema document. Always passes.
    Unrecognized(Value),
}

impl RuleRef {
    /// Reference a named rule.
    pub fn named(name: impl Into<String>) -> Self {
        RuleRef::Named(name.into())
    }

    /// Reference a parameterized rule.
    pub fn parameterized(name: impl Into<String>, arg: impl Into<Value>) -> Self {
        RuleRef::Parameterized {
            name: name.into(),
            arg: arg.into(),
        }
    }

    /// Shorthand for `minLength` with the given bound.
    pub fn min_length(min_len: usize) -> Self {
        Self::parameterized("minLength", min_len)
    }

    /// Wrap a closure or other [`Predicate`] as a custom rule.
    pub fn custom(predicate: impl Predicate + 'static) -> Self {
        RuleRef::Custom(Arc::new(predicate))
    }

    /// Parse one entry of a schema document.
    ///
    /// A string is a named rule and an object with a string `name` is a
    /// parameterized rule (its `arg` defaults to null). Everything else is
    /// kept as [`RuleRef::Unrecognized`].
    pub fn from_json(raw: &Value) -> Self {
        match raw {
            Value::String(name) => RuleRef::Named(name.clone()),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => RuleRef::Parameterized {
                    name: name.clone(),
                    arg: map.get("arg").cloned().unwrap_or(Value::Null),
                },
                _ => RuleRef::Unrecognized(raw.clone()),
            },
            _ => RuleRef::Unrecognized(raw.clone()),
        }
    }

    /// The rule's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            RuleRef::Named(name) | RuleRef::Parameterized { name, .. } => Some(name.as_str()),
            RuleRef::Custom(_) | RuleRef::Unrecognized(_) => None,
        }
    }
}

impl fmt::Debug for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            RuleRef::Parameterized { name, arg } => f
                .debug_struct("Parameterized")
                .field("name", name)
                .field("arg", arg)
                .finish(),
            RuleRef::Custom(_) => f.write_str("Custom(..)"),
            RuleRef::Unrecognized(raw) => f.debug_tuple("Unrecognized").field(raw).finish(),
        }
    }
}

impl From<&str> for RuleRef {
    fn from(name: &str) -> Self {
        RuleRef::named(name)
    }
}
