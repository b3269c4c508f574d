//! Discovery and loading of `.cvss2-tools.yaml`.

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// File names probed in every candidate directory, in order.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".cvss2-tools.yaml",
    ".cvss2-tools.yml",
    "cvss2-tools.yaml",
    "cvss2-tools.yml",
];

/// Directory name under the user config directory
const CONFIG_DIR_NAME: &str = "cvss2-tools";

/// Locate the config file to use.
///
/// An existing `explicit_path` wins. Otherwise the current directory, the
/// enclosing git checkout, `~/.config/cvss2-tools/` and the home directory
/// are searched in that order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    let git_root = find_git_root();
    let user_dir = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME));
    let home = dirs::home_dir();

    [cwd, git_root, user_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// First known config file name present in `dir`
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Errors raised while reading a config file
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Read and deserialize a YAML config file.
///
/// Missing sections and keys take their default values.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.is_file() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml_ng::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The discovered config, or defaults when none is found or it cannot be
/// loaded. The second element is the file actually used.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Ignoring config file: {e}");
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer `other` over this config.
    ///
    /// Only values that differ from the defaults override, so unset CLI
    /// flags leave file settings in place.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Output config
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.minimal_json {
            self.output.minimal_json = true;
        }

        // Check config
        if other.check.fail_fast {
            self.check.fail_fast = true;
        }
        if other.check.max_reported_failures != defaults.check.max_reported_failures {
            self.check.max_reported_failures = other.check.max_reported_failures;
        }
        if other.check.threads != defaults.check.threads {
            self.check.threads = other.check.threads;
        }
    }

    /// Discovered config with `cli_overrides` merged on top.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# cvss2-tools configuration
#
# Place this file at .cvss2-tools.yaml in your project root or at
# ~/.config/cvss2-tools/cvss2-tools.yaml. CLI arguments override it.

output:
  # Format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: scores.json
  # Disable colored output
  no_color: false
  # Omit Not Defined metrics and absent scores from JSON
  minimal_json: false

check:
  # Stop after the first corpus file with failures
  fail_fast: false
  # Failures listed per corpus file (0 = all)
  max_reported_failures: 20
  # Verification threads (0 = one per CPU)
  threads: 0
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".cvss2-tools.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_prefers_hidden_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("cvss2-tools.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".cvss2-tools.yml"), "").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(tmp.path().join(".cvss2-tools.yml")));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
output:
  format: json
  minimal_json: true
check:
  fail_fast: true
  threads: 4
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.minimal_json);
        assert!(config.check.fail_fast);
        assert_eq!(config.check.threads, 4);
        assert_eq!(config.check.max_reported_failures, 20);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "output:\n  format: sarif\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.check.threads = 8;
        base.output.minimal_json = true;

        let mut overrides = AppConfig::default();
        overrides.output.format = ReportFormat::Json;
        overrides.check.fail_fast = true;

        base.merge(&overrides);

        assert_eq!(base.output.format, ReportFormat::Json);
        assert!(base.output.minimal_json);
        assert!(base.check.fail_fast);
        assert_eq!(base.check.threads, 8);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        let config: AppConfig = serde_yaml_ng::from_str(&example).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output:\n  no_color: true").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }

    #[test]
    fn test_from_file_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "check:\n  max_reported_failures: 3\n").unwrap();

        let mut overrides = AppConfig::default();
        overrides.output.no_color = true;

        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.check.max_reported_failures, 3);
        assert!(config.output.no_color);
    }
}
