//! Configuration module for cvss2-tools.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.cvss2-tools.yaml` file in your project root or `~/.config/cvss2-tools/`:
//!
//! ```yaml
//! output:
//!   format: json
//!   minimal_json: true
//! check:
//!   fail_fast: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, CheckConfig, OutputConfig, DEFAULT_MAX_REPORTED_FAILURES};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.cvss2-tools.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"AppConfig\""));
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"max_reported_failures\""));
    }
}
