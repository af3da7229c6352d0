//! Configuration for pantry-tools.
//!
//! Settings come from a YAML file (discovered or given with `--config`) and
//! are then overridden by command-line flags:
//!
//! ```rust,ignore
//! use pantry_tools::config::{load_or_default, AppConfig};
//!
//! let (mut config, loaded_from) = load_or_default(None);
//! config.merge(&AppConfig::builder().no_color(true).build());
//! ```
//!
//! ```yaml
//! api:
//!   base_url: http://localhost:8080
//! pantry:
//!   default_sort: expiry
//! recipes:
//!   page_size: 12
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, CONFIG_DIR_NAME, DEFAULT_API_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
    MAX_RETRIES_LIMIT,
};
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config,
    generate_preset_config, load_config_file, load_or_default, ConfigFileError,
};
pub use types::{
    ApiConfig, AppConfig, AppConfigBuilder, OutputConfig, PantryConfig, RecipesConfig,
    SessionConfig,
};
pub use validation::{ConfigError, Validatable};

/// JSON Schema for the config file format, for editor validation and completion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        for section in ["api", "pantry", "recipes", "output", "session"] {
            assert!(schema.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }
}
