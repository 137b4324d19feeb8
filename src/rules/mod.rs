// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for field validation.
//!
//! Predicates test single values, the registry maps rule names to
//! predicates and error codes, and the engine applies a schema's rule lists
//! to an object to build a [`ValidationReport`].

mod engine;
pub mod predicates;
mod reference;
mod registry;
mod validator;

pub use engine::{validate_object, SchemaValidator};
pub use predicates::{is_email, is_min_length, is_phone, is_required, is_strong_password};
pub use reference::{Predicate, RuleRef};
pub use registry::{codes, ParameterizedPredicate, RuleInfo, RuleKind, RuleRegistry};
pub use validator::ValidationReport;
