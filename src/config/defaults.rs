//! Default values and named presets.

use super::types::AppConfig;
use crate::reports::ReportFormat;

/// Gateway every service sits behind.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GET retries. Zero keeps the single-attempt behavior of the web client.
pub const DEFAULT_MAX_RETRIES: u8 = 0;

/// Upper bound accepted for `api.max_retries`.
pub const MAX_RETRIES_LIMIT: u8 = 5;

/// Directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "pantry-tools";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Interactive use against a local gateway
    Default,
    /// Scripting: JSON output, no color, a few retries
    Scripting,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Scripting => "scripting",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "scripting" | "script" | "ci" => Some(Self::Scripting),
            _ => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Scripting]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Build a config from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Scripting => Self::builder()
                .output_format(ReportFormat::Json)
                .no_color(true)
                .max_retries(3)
                .build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("DEFAULT"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("ci"), Some(ConfigPreset::Scripting));
        assert_eq!(ConfigPreset::from_name("fancy"), None);
    }

    #[test]
    fn test_scripting_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Scripting);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert_eq!(config.api.max_retries, 3);
    }

    #[test]
    fn test_all_presets_round_trip_names() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
    }
}
