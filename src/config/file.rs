//! Configuration file loading and discovery.

use super::defaults::{ConfigPreset, CONFIG_DIR_NAME};
use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".pantry-tools.yaml",
    ".pantry-tools.yml",
    "pantry-tools.yaml",
    "pantry-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/pantry-tools/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let candidates = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.api.base_url != defaults.api.base_url {
            self.api.base_url.clone_from(&other.api.base_url);
        }
        if other.api.timeout_secs != defaults.api.timeout_secs {
            self.api.timeout_secs = other.api.timeout_secs;
        }
        if other.api.max_retries != defaults.api.max_retries {
            self.api.max_retries = other.api.max_retries;
        }

        if other.pantry.default_sort != defaults.pantry.default_sort {
            self.pantry.default_sort = other.pantry.default_sort;
        }
        if other.pantry.default_category != defaults.pantry.default_category {
            self.pantry.default_category = other.pantry.default_category;
        }
        if other.pantry.export_file_name != defaults.pantry.export_file_name {
            self.pantry
                .export_file_name
                .clone_from(&other.pantry.export_file_name);
        }

        if other.recipes.page_size != defaults.recipes.page_size {
            self.recipes.page_size = other.recipes.page_size;
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.session.file.is_some() {
            self.session.file.clone_from(&other.session.file);
        }
    }

    /// Load from file and merge with CLI overrides.
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

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        "# pantry-tools configuration\n\
         # Place this file at .pantry-tools.yaml or ~/.config/pantry-tools/pantry-tools.yaml\n\n{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a config file holding the values of a named preset.
#[must_use]
pub fn generate_preset_config(preset: ConfigPreset) -> String {
    format!(
        "# pantry-tools configuration (preset: {preset})\n\n{}",
        serde_yaml::to_string(&AppConfig::from_preset(preset)).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# pantry-tools configuration
# ==========================
#
# Looked up in: the --config path, the current directory,
# ~/.config/pantry-tools/ and the home directory.
# CLI arguments always override file settings.

api:
  # API gateway base URL (also PANTRY_TOOLS_API_URL)
  base_url: http://localhost:8080
  timeout_secs: 30
  # Extra attempts for failed GET requests, 0-5
  max_retries: 0

pantry:
  # name, expiry, added, quantity
  default_sort: name
  # all, Dairy, Meat, Vegetables, Fruits, Grains, Spices, Other
  default_category: all
  export_file_name: my-pantry.csv

recipes:
  page_size: 12

output:
  # auto, table, json, csv
  format: auto
  # file: pantry.json
  no_color: false

# session:
#   file: ~/.config/pantry-tools/session.json
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortKey;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".pantry-tools.yaml");
        std::fs::write(&config_path, "recipes:\n  page_size: 6\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
api:
  base_url: https://pantry.example.org
pantry:
  default_sort: expiry
  default_category: dairy
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.api.base_url, "https://pantry.example.org");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.pantry.default_sort, SortKey::Expiry);
        assert_eq!(config.pantry.default_category.to_string(), "Dairy");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_rejects_unknown_category() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "pantry:\n  default_category: candy\n").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "api: [unclosed").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().page_size(6).build();
        let overrides = AppConfig::builder()
            .api_url("https://pantry.example.org")
            .output_format(ReportFormat::Csv)
            .build();

        base.merge(&overrides);

        assert_eq!(base.api.base_url, "https://pantry.example.org");
        assert_eq!(base.output.format, ReportFormat::Csv);
        assert_eq!(base.recipes.page_size, 6);
    }

    #[test]
    fn test_preset_config_parses_to_preset() {
        for preset in ConfigPreset::all() {
            let content = generate_preset_config(*preset);
            assert!(content.contains(preset.name()));
            let parsed: AppConfig = serde_yaml::from_str(&content).unwrap();
            assert_eq!(parsed, AppConfig::from_preset(*preset));
        }
        let scripting: AppConfig =
            serde_yaml::from_str(&generate_preset_config(ConfigPreset::Scripting)).unwrap();
        assert_eq!(scripting.output.format, ReportFormat::Json);
        assert_eq!(scripting.api.max_retries, 3);
    }

    #[test]
    fn test_generated_examples_parse() {
        let example: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "recipes:\n  page_size: 6\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
