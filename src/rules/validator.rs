// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation report types.

use console::style;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::config::OutputFormat;

/// Result of validating one object against a schema.
///
/// `valid` is true exactly when `errors` is empty, and every field listed in
/// `errors` has at least one code. Fields keep the order they were
/// validated in, which is the schema's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    valid: bool,
    errors: Vec<(String, Vec<String>)>,
}

impl ValidationReport {
    /// Build a report from per-field error codes.
    ///
    /// Fields with no codes are dropped. A field given more than once keeps
    /// its first position and collects all of its codes.
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut collected: Vec<(String, Vec<String>)> = Vec::new();
        for (field, codes) in errors {
            if codes.is_empty() {
                continue;
            }
            match collected.iter_mut().find(|(name, _)| *name == field) {
                Some((_, existing)) => existing.extend(codes),
                None => collected.push((field, codes)),
            }
        }
        let errors = collected;

        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A report with no failures.
    pub fn valid() -> Self {
        Self::from_errors(std::iter::empty())
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Error codes per failing field, in validation order.
    pub fn errors(&self) -> &[(String, Vec<String>)] {
        &self.errors
    }

    /// Names of the failing fields, in validation order.
    pub fn failed_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(field, _)| field.as_str())
    }

    /// Error codes for one field (empty if it passed).
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, codes)| codes.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of error codes across fields.
    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|(_, codes)| codes.len()).sum()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.valid {
            "Valid".to_string()
        } else {
            format!(
                "Invalid ({} fields, {} errors)",
                self.errors.len(),
                self.error_count()
            )
        }
    }

    /// Render for terminal output.
    pub fn format_text(&self) -> String {
        let status = if self.valid {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut output = format!("{} {}", status, self.summary());
        for (field, codes) in &self.errors {
            output.push_str(&format!(
                "\n  {} {}",
                style(field).cyan(),
                style(codes.join(", ")).red()
            ));
        }
        output
    }

    /// Render as pretty JSON.
    pub fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => println!("{}", self.format_json()),
            OutputFormat::Text => println!("{}", self.format_text()),
        }
    }
}

/// Serializes as `{"valid": bool, "errors": {field: [code, ...]}}`.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("ValidationReport", 2)?;
        report.serialize_field("valid", &self.valid)?;
        report.serialize_field("errors", &ErrorMap(&self.errors))?;
        report.end()
    }
}

struct ErrorMap<'a>(&'a [(String, Vec<String>)]);

impl Serialize for ErrorMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, codes) in self.0 {
            map.serialize_entry(field, codes)?;
        }
        map.end()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}
