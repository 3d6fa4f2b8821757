// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::color::{self, DEFAULT_HEX};
use crate::models::{ColorValue, PasswordSpec};

// Configuration for the tools service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub cors_max_age: usize,

    // Password Generation
    pub default_password_length: usize,
    pub default_min_digits: usize,
    pub default_min_symbols: usize,
    pub default_exclude_similar: bool,

    // Color Converter
    pub default_color: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,
            cors_max_age: 3600,

            // Password Generation
            default_password_length: 12,
            default_min_digits: 1,
            default_min_symbols: 1,
            default_exclude_similar: false,

            // Color Converter
            default_color: DEFAULT_HEX.to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

// Parse an env var into `target`, keeping the current value when it is unset or malformed
fn override_from_env<T: FromStr>(key: &str, target: &mut T, warnings: &mut Vec<String>) {
    if let Ok(val) = env::var(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, key)),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }
        override_from_env("WEB_PORT", &mut config.web_port, &mut config.warnings);
        override_from_env("CORS_MAX_AGE", &mut config.cors_max_age, &mut config.warnings);

        // Password Generation
        override_from_env("DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length, &mut config.warnings);
        override_from_env("DEFAULT_MIN_DIGITS", &mut config.default_min_digits, &mut config.warnings);
        override_from_env("DEFAULT_MIN_SYMBOLS", &mut config.default_min_symbols, &mut config.warnings);
        override_from_env("DEFAULT_EXCLUDE_SIMILAR", &mut config.default_exclude_similar, &mut config.warnings);

        // Color Converter
        if let Ok(hex) = env::var("DEFAULT_COLOR") {
            match color::parse_hex(&hex) {
                Ok(_) => config.default_color = hex,
                Err(e) => config.warnings.push(format!("Ignoring DEFAULT_COLOR: {}", e)),
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Password options used when a request leaves a field out.
    pub fn default_password_spec(&self) -> PasswordSpec {
        PasswordSpec {
            length: self.default_password_length,
            exclude_similar: self.default_exclude_similar,
            min_digits: self.default_min_digits,
            min_symbols: self.default_min_symbols,
            ..PasswordSpec::default()
        }
    }

    /// Starting color for a new converter instance.
    pub fn default_color_value(&self) -> ColorValue {
        ColorValue::from_hex(&self.default_color).unwrap_or_default()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharClass;

    #[test]
    fn defaults_feed_the_engines() {
        let config = Config::default();
        let spec = config.default_password_spec();
        assert_eq!(spec.length, 12);
        assert_eq!(spec.min_digits, 1);
        assert!(CharClass::ALL.iter().all(|c| spec.has(*c)));
        assert_eq!(config.default_color_value().hex, DEFAULT_HEX);
    }

    #[test]
    fn bad_default_color_falls_back() {
        let config = Config {
            default_color: "nope".to_string(),
            ..Config::default()
        };
        assert_eq!(config.default_color_value(), ColorValue::default());
    }

    #[test]
    fn env_overrides_ignore_malformed_values() {
        let mut port: u16 = 5000;
        let mut warnings = Vec::new();
        env::set_var("DEVTOOLS_TEST_PORT", "not-a-port");
        override_from_env("DEVTOOLS_TEST_PORT", &mut port, &mut warnings);
        assert_eq!(port, 5000);
        assert_eq!(warnings, vec!["Ignoring invalid value 'not-a-port' for DEVTOOLS_TEST_PORT".to_string()]);

        env::set_var("DEVTOOLS_TEST_PORT", " 8080 ");
        override_from_env("DEVTOOLS_TEST_PORT", &mut port, &mut warnings);
        assert_eq!(port, 8080);
        assert_eq!(warnings.len(), 1);
        env::remove_var("DEVTOOLS_TEST_PORT");
    }

    #[test]
    fn load_collects_warnings_instead_of_logging() {
        env::set_var("DEFAULT_MIN_SYMBOLS", "lots");
        let config = Config::load();
        env::remove_var("DEFAULT_MIN_SYMBOLS");

        assert_eq!(config.default_min_symbols, 1);
        assert!(config
            .warnings
            .iter()
            .any(|w| w == "Ignoring invalid value 'lots' for DEFAULT_MIN_SYMBOLS"));
    }
}
