// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# fieldcheck configuration

[validation]
# Reject schemas that reference unknown rules before validating.
strict = false

[output]
# "text" or "json"
format = "text"
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, OutputFormat};

    #[test]
    fn test_example_config_parses() {
        let config = parse_config(example_config()).unwrap();
        assert!(!config.validation.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }
}
