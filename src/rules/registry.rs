// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule registry and dispatch.
//!
//! The registry maps rule names to predicates and the error codes they
//! produce. It is built once and then only read, so a single registry can be
//! shared across threads and validation runs.

use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::predicates;
use super::reference::{Predicate, RuleRef};

/// Error codes produced by the built-in rules.
pub mod codes {
    /// Value is absent or blank.
    pub const REQUIRED: &str = "required";
    /// Value is not an email address.
    pub const INVALID_EMAIL: &str = "invalid_email";
    /// Value is not a phone number.
    pub const INVALID_PHONE: &str = "invalid_phone";
    /// Value is not a strong password.
    pub const WEAK_PASSWORD: &str = "weak_password";
    /// Prefix for `min_length_<N>`.
    pub const MIN_LENGTH_PREFIX: &str = "min_length";
    /// A custom predicate returned `false`.
    pub const INVALID: &str = "invalid";

    /// Format the code for a failed parameterized rule.
    pub fn parameterized(prefix: &str, arg: usize) -> String {
        format!("{}_{}", prefix, arg)
    }
}

lazy_static! {
    static ref BUILTIN: RuleRegistry = RuleRegistry::builtin();
}

/// A predicate taking an integer argument.
pub type ParameterizedPredicate = dyn Fn(&Value, usize) -> bool + Send + Sync;

#[derive(Clone)]
struct NamedRule {
    code: String,
    predicate: Arc<dyn Predicate>,
}

#[derive(Clone)]
struct ParameterizedRule {
    code_prefix: String,
    predicate: Arc<ParameterizedPredicate>,
}

/// Whether a registered rule takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Named,
    Parameterized,
}

/// Description of a registered rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    /// Name used in schemas.
    pub name: String,
    /// Error code, or code prefix for parameterized rules.
    pub code: String,
    /// Whether the rule takes an argument.
    pub kind: RuleKind,
}

/// Immutable table of the rules a schema may reference by name.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    named: BTreeMap<String, NamedRule>,
    parameterized: BTreeMap<String, ParameterizedRule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("required", codes::REQUIRED, predicates::is_required);
        registry.register("email", codes::INVALID_EMAIL, predicates::is_email);
        registry.register("phone", codes::INVALID_PHONE, predicates::is_phone);
        registry.register(
            "strongPassword",
            codes::WEAK_PASSWORD,
            predicates::is_strong_password,
        );
        registry.register_parameterized(
            "minLength",
            codes::MIN_LENGTH_PREFIX,
            predicates::is_min_length,
        );
        registry
    }

    /// The shared built-in registry.
    pub fn shared() -> &'static RuleRegistry {
        &BUILTIN
    }

    /// Register a named rule, replacing any rule with the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        predicate: impl Predicate + 'static,
    ) -> &mut Self {
        self.named.insert(
            name.into(),
            NamedRule {
                code: code.into(),
                predicate: Arc::new(predicate),
            },
        );
        self
    }

    /// Register a rule taking a non-negative integer argument.
    ///
    /// On failure the rule reports `<code_prefix>_<arg>`.
    pub fn register_parameterized<F>(
        &mut self,
        name: impl Into<String>,
        code_prefix: impl Into<String>,
        predicate: F,
    ) -> &mut Self
    where
        F: Fn(&Value, usize) -> bool + Send + Sync + 'static,
    {
        self.parameterized.insert(
            name.into(),
            ParameterizedRule {
                code_prefix: code_prefix.into(),
                predicate: Arc::new(predicate),
            },
        );
        self
    }

    /// Whether a named rule is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Whether a parameterized rule is registered.
    pub fn contains_parameterized(&self, name: &str) -> bool {
        self.parameterized.contains_key(name)
    }

    /// List all registered rules, ordered by name.
    pub fn rules(&self) -> Vec<RuleInfo> {
        let named = self.named.iter().map(|(name, rule)| RuleInfo {
            name: name.clone(),
            code: rule.code.clone(),
            kind: RuleKind::Named,
        });
        let parameterized = self.parameterized.iter().map(|(name, rule)| RuleInfo {
            name: name.clone(),
            code: format!("{}_<N>", rule.code_prefix),
            kind: RuleKind::Parameterized,
        });

        let mut rules: Vec<RuleInfo> = named.chain(parameterized).collect();
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        rules
    }

    /// Run one rule against a value.
    ///
    /// Returns `None` when the rule passes and the error code otherwise.
    /// Unknown names and malformed references pass.
    pub fn dispatch(&self, value: &Value, rule: &RuleRef) -> Option<String> {
        match rule {
            RuleRef::Custom(predicate) => {
                if predicate.test(value) {
                    None
                } else {
                    Some(codes::INVALID.to_string())
                }
            }
            RuleRef::Named(name) => {
                let Some(rule) = self.named.get(name) else {
                    tracing::trace!(rule = %name, "Ignoring unknown rule");
                    return None;
                };
                if rule.predicate.test(value) {
                    None
                } else {
                    Some(rule.code.clone())
                }
            }
            RuleRef::Parameterized { name, arg } => {
                let Some(rule) = self.parameterized.get(name) else {
                    tracing::trace!(rule = %name, "Ignoring unknown parameterized rule");
                    return None;
                };
                let Some(arg) = integer_arg(arg) else {
                    tracing::trace!(rule = %name, %arg, "Ignoring rule with unusable argument");
                    return None;
                };
                if (rule.predicate)(value, arg) {
                    None
                } else {
                    Some(codes::parameterized(&rule.code_prefix, arg))
                }
            }
            RuleRef::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .field("parameterized", &self.parameterized.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Read a rule argument as a non-negative integer.
///
/// JSON has a single number type, so integral floats such as `8.0` count.
pub(crate) fn integer_arg(arg: &Value) -> Option<usize> {
    if let Some(n) = arg.as_u64() {
        return usize::try_from(n).ok();
    }

    let n = arg.as_f64()?;
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
        Some(n as usize)
    } else {
        None
    }
}
