//! Environment variable handling and .env file management

use crate::{
    defaults,
    error::{AppError, Result},
    logging::{LogFormat, LogLevel},
};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load `.env` from the working directory if it exists
    ///
    /// Returns whether a file was loaded.
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new(".env"))
    }

    /// Load a specific env file if it exists
    pub fn load_env_file_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;
        Ok(true)
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "LATENCY_INPUT" | "LATENCY_OUTPUT" | "PLOT_TITLE" => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} is set but empty", key)));
                }
            }
            "PLOT_WIDTH" | "PLOT_HEIGHT" => {
                let pixels: u32 = value.trim().parse()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
                if !(defaults::MIN_DIMENSION..=defaults::MAX_DIMENSION).contains(&pixels) {
                    return Err(AppError::config(format!(
                        "{} must be between {} and {}, got: {}",
                        key, defaults::MIN_DIMENSION, defaults::MAX_DIMENSION, pixels
                    )));
                }
            }
            "OPEN_VIEWER" | "ENABLE_COLOR" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            "LOG_LEVEL" => {
                value.trim().parse::<LogLevel>()
                    .map_err(|e| AppError::config(format!("Invalid {} value: {}", key, e)))?;
            }
            "LOG_FORMAT" => {
                value.trim().parse::<LogFormat>()
                    .map_err(|e| AppError::config(format!("Invalid {} value: {}", key, e)))?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("LATENCY_INPUT", "Sample file, one latency (µs) per line", "iac_benchmark.csv"),
            ("LATENCY_OUTPUT", "Chart image path (.png or .svg)", "iac_benchmark.png"),
            ("PLOT_WIDTH", "Chart width in pixels", "1200"),
            ("PLOT_HEIGHT", "Chart height in pixels", "600"),
            ("PLOT_TITLE", "Chart title", "Latency per Iteration (µs)"),
            ("OPEN_VIEWER", "Open the chart after rendering", "false"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
            ("LOG_LEVEL", "Minimum log level (trace, debug, info, warn, error, fatal)", "info"),
            ("LOG_FORMAT", "Log line format (console, json, compact)", "compact"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<16} {}\n", var, description));
            help.push_str(&format!("  {:<16} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        let mut warnings = Vec::new();

        for (var_name, _, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(var_name) {
                if let Err(e) = Self::validate_env_var(var_name, &value) {
                    warnings.push(e.to_string());
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_LOCK;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_env_var_dimensions() {
        assert!(EnvManager::validate_env_var("PLOT_WIDTH", "1200").is_ok());
        assert!(EnvManager::validate_env_var("PLOT_WIDTH", "10").is_err());
        assert!(EnvManager::validate_env_var("PLOT_HEIGHT", "tall").is_err());
    }

    #[test]
    fn test_validate_env_var_flags_and_paths() {
        assert!(EnvManager::validate_env_var("OPEN_VIEWER", "true").is_ok());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "yes").is_err());
        assert!(EnvManager::validate_env_var("LATENCY_INPUT", "  ").is_err());
        assert!(EnvManager::validate_env_var("UNRELATED", "anything").is_ok());
        assert!(EnvManager::validate_env_var("LOG_LEVEL", "debug").is_ok());
        assert!(EnvManager::validate_env_var("LOG_FORMAT", "yaml").is_err());
    }

    #[test]
    fn test_env_help_lists_every_variable() {
        let help = EnvManager::display_env_help();
        for (var, _, _) in EnvManager::get_supported_env_vars() {
            assert!(help.contains(var), "missing {}", var);
        }
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!EnvManager::load_env_file_from(&dir.path().join(".env")).unwrap());
    }

    #[test]
    fn test_env_file_values_exported() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("PLOT_TITLE");

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "PLOT_TITLE=\"From env file\"").unwrap();

        assert!(EnvManager::load_env_file_from(file.path()).unwrap());
        assert_eq!(std::env::var("PLOT_TITLE").unwrap(), "From env file");
        std::env::remove_var("PLOT_TITLE");
    }

    #[test]
    fn test_validate_current_env_reports_bad_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("PLOT_HEIGHT", "0");

        let warnings = EnvManager::validate_current_env();
        assert!(warnings.iter().any(|w| w.contains("PLOT_HEIGHT")));
        std::env::remove_var("PLOT_HEIGHT");
    }
}
