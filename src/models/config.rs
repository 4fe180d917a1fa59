//! Configuration data model and validation

use crate::defaults;
use crate::logging::{LogFormat, LogLevel};
use crate::types::{AppError, ImageFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sample file written by the benchmark harness
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Chart image destination; the extension selects the format
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Chart caption
    #[serde(default = "default_title")]
    pub title: String,

    /// Open the rendered chart in the platform image viewer
    #[serde(default = "default_open_viewer")]
    pub open_viewer: bool,

    /// Print the summary without rendering a chart
    #[serde(default)]
    pub summary_only: bool,

    /// Print the summary as JSON
    #[serde(default)]
    pub json: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,

    /// Minimum log level, overriding what `verbose`/`debug` imply
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    /// Log line format, overriding what `debug` implies
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            width: default_width(),
            height: default_height(),
            title: default_title(),
            open_viewer: default_open_viewer(),
            summary_only: false,
            json: false,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
            log_level: None,
            log_format: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Image format implied by the output path
    pub fn image_format(&self) -> Result<ImageFormat> {
        ImageFormat::from_path(&self.output)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(AppError::config("Input path cannot be empty"));
        }

        if self.summary_only {
            // Chart settings are never used
            return Ok(());
        }

        if self.output.as_os_str().is_empty() {
            return Err(AppError::config("Output path cannot be empty"));
        }
        self.image_format()?;

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(defaults::MIN_DIMENSION..=defaults::MAX_DIMENSION).contains(&value) {
                return Err(AppError::validation(format!(
                    "Chart {} must be between {} and {} pixels, got {}",
                    name,
                    defaults::MIN_DIMENSION,
                    defaults::MAX_DIMENSION,
                    value
                )));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(input) = std::env::var("LATENCY_INPUT") {
            if !input.trim().is_empty() {
                self.input = PathBuf::from(input.trim());
            }
        }

        if let Ok(output) = std::env::var("LATENCY_OUTPUT") {
            if !output.trim().is_empty() {
                self.output = PathBuf::from(output.trim());
            }
        }

        if let Ok(width) = std::env::var("PLOT_WIDTH") {
            self.width = width.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid PLOT_WIDTH value '{}': {}", width, e)))?;
        }

        if let Ok(height) = std::env::var("PLOT_HEIGHT") {
            self.height = height.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid PLOT_HEIGHT value '{}': {}", height, e)))?;
        }

        if let Ok(title) = std::env::var("PLOT_TITLE") {
            if !title.trim().is_empty() {
                self.title = title;
            }
        }

        if let Ok(open_viewer) = std::env::var("OPEN_VIEWER") {
            self.open_viewer = open_viewer.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid OPEN_VIEWER value '{}': {}", open_viewer, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            let level = level.trim().parse::<LogLevel>()
                .map_err(|e| AppError::config(format!("Invalid LOG_LEVEL value: {}", e)))?;
            self.log_level = Some(level);
        }

        if let Ok(format) = std::env::var("LOG_FORMAT") {
            let format = format.trim().parse::<LogFormat>()
                .map_err(|e| AppError::config(format!("Invalid LOG_FORMAT value: {}", e)))?;
            self.log_format = Some(format);
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_input() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_OUTPUT)
}

fn default_width() -> u32 {
    defaults::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    defaults::DEFAULT_HEIGHT
}

fn default_title() -> String {
    defaults::DEFAULT_TITLE.to_string()
}

fn default_open_viewer() -> bool {
    defaults::DEFAULT_OPEN_VIEWER
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}
