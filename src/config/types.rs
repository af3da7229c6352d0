//! Configuration types.

use super::defaults::{DEFAULT_API_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::reports::{ReportFormat, EXPORT_FILE_NAME};
use crate::session::SessionStore;
use crate::view::{CategoryFilter, SortKey, ViewParameters, DEFAULT_PAGE_SIZE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration, loaded from a YAML file and layered under CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway connection settings
    pub api: ApiConfig,
    /// Pantry page defaults
    pub pantry: PantryConfig,
    /// Recipe browsing
    pub recipes: RecipesConfig,
    /// Output format, file and colors
    pub output: OutputConfig,
    /// Where the login token is kept
    pub session: SessionConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.api.timeout_secs = secs;
        self
    }

    pub const fn max_retries(mut self, retries: u8) -> Self {
        self.config.api.max_retries = retries;
        self
    }

    pub const fn default_sort(mut self, key: SortKey) -> Self {
        self.config.pantry.default_sort = key;
        self
    }

    pub const fn default_category(mut self, filter: CategoryFilter) -> Self {
        self.config.pantry.default_category = filter;
        self
    }

    pub const fn page_size(mut self, size: usize) -> Self {
        self.config.recipes.page_size = size;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub fn session_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.session.file = file;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Gateway connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the API gateway
    pub base_url: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
    /// Extra attempts for failed GET requests (mutations are never retried)
    #[schemars(range(max = 5))]
    pub max_retries: u8,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[cfg(feature = "client")]
    #[must_use]
    pub fn client_config(&self) -> crate::client::ApiClientConfig {
        crate::client::ApiClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
            max_retries: self.max_retries,
        }
    }
}

/// Initial view parameters for the pantry page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PantryConfig {
    /// Sort key: name, expiry, added, quantity
    pub default_sort: SortKey,
    /// Category filter: `all` or a category name
    pub default_category: CategoryFilter,
    /// File name used by `pantry export` when no output file is given
    pub export_file_name: String,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Name,
            default_category: CategoryFilter::All,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl PantryConfig {
    #[must_use]
    pub fn view_parameters(&self) -> ViewParameters {
        ViewParameters::new()
            .in_category(self.default_category)
            .sorted_by(self.default_sort)
    }
}

/// Recipe browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecipesConfig {
    /// Recipes per page
    #[schemars(range(min = 1))]
    pub page_size: usize,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Session persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file; defaults to `<config dir>/pantry-tools/session.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl SessionConfig {
    /// The configured file, or the per-user default.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(SessionStore::default_path)
    }

    /// Saved AI chef suggestions, kept next to the session file.
    #[must_use]
    pub fn suggestions_path(&self) -> Option<PathBuf> {
        let session = self.path()?;
        Some(session.with_file_name("suggestions.json"))
    }

    #[must_use]
    pub fn store(&self) -> Option<SessionStore> {
        self.path().map(SessionStore::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.recipes.page_size, 12);
        assert_eq!(config.pantry.export_file_name, "my-pantry.csv");
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .api_url("https://pantry.example.org")
            .default_sort(SortKey::Expiry)
            .page_size(24)
            .no_color(true)
            .build();
        assert_eq!(config.api.base_url, "https://pantry.example.org");
        assert_eq!(config.pantry.default_sort, SortKey::Expiry);
        assert_eq!(config.recipes.page_size, 24);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_view_parameters_from_pantry_defaults() {
        let pantry = PantryConfig {
            default_sort: SortKey::Quantity,
            default_category: "dairy".parse().unwrap(),
            ..PantryConfig::default()
        };
        let params = pantry.view_parameters();
        assert_eq!(params.sort_by, SortKey::Quantity);
        assert_eq!(
            params.selected_category,
            CategoryFilter::Only(crate::model::Category::Dairy)
        );
        assert!(params.search_query.is_empty());
    }

    #[test]
    fn test_explicit_session_file_wins() {
        let session = SessionConfig {
            file: Some(PathBuf::from("/tmp/session.json")),
        };
        assert_eq!(session.path(), Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(
            session.suggestions_path(),
            Some(PathBuf::from("/tmp/suggestions.json"))
        );
    }
}
