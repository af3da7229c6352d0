//! Configuration validation.

use super::defaults::MAX_RETRIES_LIMIT;
use super::types::{ApiConfig, AppConfig, OutputConfig, PantryConfig, RecipesConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// A single invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted path of the offending field
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.pantry.validate());
        errors.extend(self.recipes.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::new(
                "api.base_url",
                format!("Expected an http:// or https:// URL, got '{}'", self.base_url),
            ));
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new("api.timeout_secs", "Timeout must be at least 1 second"));
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            errors.push(ConfigError::new(
                "api.max_retries",
                format!(
                    "At most {MAX_RETRIES_LIMIT} retries are allowed, got {}",
                    self.max_retries
                ),
            ));
        }
        errors
    }
}

impl Validatable for PantryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.export_file_name.trim().is_empty() {
            vec![ConfigError::new("pantry.export_file_name", "File name must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for RecipesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.page_size == 0 {
            vec![ConfigError::new("recipes.page_size", "Page size must be at least 1")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_api_config_validation() {
        let invalid = ApiConfig {
            base_url: "localhost:8080".to_string(),
            timeout_secs: 0,
            max_retries: 9,
        };
        let errors = invalid.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["api.base_url", "api.timeout_secs", "api.max_retries"]);
    }

    #[test]
    fn test_page_size_validation() {
        assert!(!RecipesConfig { page_size: 0 }.is_valid());
        assert!(RecipesConfig { page_size: 1 }.is_valid());
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let config = OutputConfig {
            file: Some("/nonexistent-dir-for-pantry-tools/out.json".into()),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let bare = OutputConfig {
            file: Some("out.json".into()),
            ..OutputConfig::default()
        };
        assert!(bare.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new("recipes.page_size", "Page size must be at least 1");
        assert_eq!(error.to_string(), "recipes.page_size: Page size must be at least 1");
    }

    #[test]
    fn test_app_config_collects_nested_errors() {
        let mut config = AppConfig::default();
        config.pantry.export_file_name = "  ".to_string();
        config.recipes.page_size = 0;
        assert_eq!(config.validate().len(), 2);
    }
}
