// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! fieldcheck - declarative field validation
//!
//! Validates objects against a schema that maps each field to an ordered
//! list of rules, and reports which fields failed which rules.
//!
//! # Features
//!
//! - **Rule Predicates**: `required`, `email`, `phone`, `strongPassword`, `minLength`
//! - **Rule Registry**: extensible, immutable name-to-predicate table
//! - **Custom Rules**: inline predicates reported with the generic `invalid` code
//! - **Strict Mode**: optional rejection of unknown rule references
//! - **CLI**: validate JSON files from the command line
//!
//! # Example
//!
//! ```
//! use fieldcheck::rules::{validate_object, RuleRef};
//! use fieldcheck::schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("email", ["required", "email"])
//!     .field("password", [RuleRef::named("required"), RuleRef::min_length(8)]);
//!
//! let input = json!({"email": "alice@example.com", "password": "short"});
//! let report = validate_object(input.as_object().unwrap(), &schema);
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.field_errors("password"), ["min_length_8"]);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod schema;

// Re-exports for convenience
pub use config::FcConfig;
pub use error::{FcError, Result};
pub use rules::{validate_object, RuleRef, RuleRegistry, SchemaValidator, ValidationReport};
pub use schema::{FieldSchema, Schema};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of fieldcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
