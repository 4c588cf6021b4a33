//! Configuration file support for bluetrip.
//!
//! Configuration is loaded from `~/.config/bluetrip/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/bluetrip/config.toml
//! origin = "上海"
//! months_shown = 6
//! model = "gemini-2.5-flash"
//! api_key = "xxx"
//! theme = "dark"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Default origin city shown in the search bar.
pub const DEFAULT_ORIGIN: &str = "上海";

/// Default number of month pages the date picker generates.
pub const DEFAULT_MONTHS_SHOWN: usize = 6;

/// Default Gemini model for the recommendation fetch.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Origin city preselected in the search bar
    pub origin: Option<String>,

    /// Number of months the date picker shows
    pub months_shown: Option<usize>,

    /// Gemini API key; falls back to the GEMINI_API_KEY environment variable
    pub api_key: Option<String>,

    /// Gemini model used for recommendations
    pub model: Option<String>,

    /// Theme name to use (reserved for future use)
    pub theme: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bluetrip")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, origin: Option<String>, months_shown: Option<usize>) -> Self {
        if origin.is_some() {
            self.origin = origin;
        }
        if months_shown.is_some() {
            self.months_shown = months_shown;
        }
        self
    }

    /// Get the origin city.
    pub fn origin(&self) -> String {
        self.origin
            .clone()
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
    }

    /// Get the number of months the picker generates (at least 1).
    pub fn months_shown(&self) -> usize {
        self.months_shown.unwrap_or(DEFAULT_MONTHS_SHOWN).max(1)
    }

    /// Get the Gemini API key, falling back to the environment variable.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }

    /// Get the Gemini model name.
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.origin(), "上海");
        assert_eq!(config.months_shown(), 6);
        assert_eq!(config.model(), "gemini-2.5-flash");
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            origin = "北京"
            months_shown = 3
            model = "gemini-2.5-pro"
            theme = "dark"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.origin(), "北京");
        assert_eq!(config.months_shown(), 3);
        assert_eq!(config.model(), "gemini-2.5-pro");
        assert_eq!(config.theme, Some("dark".to_string()));
    }

    #[test]
    fn test_overrides_win() {
        let config: Config = toml::from_str(r#"origin = "北京""#).unwrap();
        let config = config.with_overrides(Some("深圳".to_string()), None);
        assert_eq!(config.origin(), "深圳");
        assert_eq!(config.months_shown(), 6);
    }

    #[test]
    fn test_months_shown_floor() {
        let config: Config = toml::from_str("months_shown = 0").unwrap();
        assert_eq!(config.months_shown(), 1);
    }
}
