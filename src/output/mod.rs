//! Output formatting and display system
//!
//! Turns a run's statistics into the stdout report: a colored or plain table
//! for people, pretty JSON for scripts.

mod formatter;
mod colored;

pub use formatter::{
    format_micros,
    Alignment,
    Column,
    FormattingOptions,
    OutputFormatter,
    PlainFormatter,
    RowData,
    TableFormat,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
    SpreadLevel,
};

use crate::{
    error::{ErrorContext, Result},
    models::Config,
    stats::SampleSummary,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the report shows about one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Sample file that was read
    pub input: PathBuf,
    /// Chart that was written, if any
    pub chart: Option<PathBuf>,
    #[serde(flatten)]
    pub summary: SampleSummary,
}

impl SummaryReport {
    pub fn new(input: PathBuf, chart: Option<PathBuf>, summary: SampleSummary) -> Self {
        Self { input, chart, summary }
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize summary report")
    }
}

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
            table_borders: true,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

/// Main output coordinator that handles result display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
    title: String,
    json: bool,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            formatter,
            title: crate::defaults::DEFAULT_TITLE.to_string(),
            json: false,
        }
    }

    /// Pick the formatter, header title and mode from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut coordinator = Self::new(
            OutputFormatterFactory::create_formatter(config.enable_color, config.verbose),
        );
        coordinator.title = config.title.clone();
        coordinator.json = config.json;
        coordinator
    }

    /// Render the report for stdout
    pub fn display_report(&self, report: &SummaryReport) -> Result<String> {
        if self.json {
            return report.to_json();
        }

        let mut output = String::new();
        output.push_str(&self.formatter.format_header(&self.title)?);
        output.push_str("\n\n");
        output.push_str(&self.formatter.format_summary(report)?);
        Ok(output)
    }

    pub fn display_warning(&self, warning: &str) -> Result<String> {
        self.formatter.format_warning(warning)
    }
}
