//! Configuration validation rules beyond field checks

use crate::{
    models::Config,
    error::{AppError, Result},
};
use colored::Colorize;

/// Aspect ratios outside this band squash the time axis or the latency axis
const ASPECT_RATIO_RANGE: std::ops::RangeInclusive<f64> = 1.0..=4.0;

/// Configuration validator with file-system aware rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and collect non-fatal warnings
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Field checks
        config.validate()?;

        warnings.extend(Self::validate_input(config));
        if config.summary_only {
            if config.open_viewer {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    "--open has no effect with --summary-only; no chart is rendered".to_string(),
                ));
            }
        } else {
            warnings.extend(Self::validate_output(config)?);
            warnings.extend(Self::validate_dimensions(config));
        }

        Ok(warnings)
    }

    fn validate_input(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.input.extension().and_then(|e| e.to_str()) != Some("csv") {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Input '{}' does not have a .csv extension; reading it as one latency per line", config.input.display()),
            ));
        }

        warnings
    }

    fn validate_output(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if config.output == config.input {
            return Err(AppError::config(format!(
                "Output path '{}' is the same as the input file",
                config.output.display()
            )));
        }

        if let Some(parent) = config.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(AppError::config(format!(
                    "Output directory '{}' does not exist",
                    parent.display()
                )));
            }
        }

        if config.output.exists() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Existing chart '{}' will be overwritten", config.output.display()),
            ));
        }

        Ok(warnings)
    }

    fn validate_dimensions(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let ratio = config.width as f64 / config.height as f64;

        if !ASPECT_RATIO_RANGE.contains(&ratio) {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Chart size {}x{} has aspect ratio {:.2}; per-iteration detail may be hard to read",
                    config.width, config.height, ratio
                ),
            ));
        }

        warnings
    }
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

/// Non-fatal configuration finding
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        if use_color {
            let level = match self.level {
                ValidationLevel::Info => self.level.as_str().blue(),
                ValidationLevel::Warning => self.level.as_str().yellow(),
            };
            format!("[{}] {}", level, self.message)
        } else {
            format!("[{}] {}", self.level.as_str(), self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
