//! Colored formatter implementation with terminal color support

use crate::{
    error::Result,
    stats::SampleSummary,
};
use super::formatter::{
    format_micros, summary_rows, summary_table_format, FormattingOptions, OutputFormatter,
    PlainFormatter,
};
use super::SummaryReport;
use colored::*;

/// Run-to-run spread classification, based on the coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadLevel {
    Stable,    // cv < 10%
    Moderate,  // 10-30%
    Noisy,     // > 30%
}

impl SpreadLevel {
    /// Classify a summary by std dev relative to the mean
    pub fn from_summary(summary: &SampleSummary) -> Self {
        if summary.mean == 0.0 {
            return if summary.std_dev == 0.0 { Self::Stable } else { Self::Noisy };
        }

        let cv = summary.std_dev / summary.mean.abs();
        if cv < 0.10 {
            Self::Stable
        } else if cv < 0.30 {
            Self::Moderate
        } else {
            Self::Noisy
        }
    }

    /// Get color for this spread level
    pub fn color(&self) -> Color {
        match self {
            Self::Stable => Color::Green,
            Self::Moderate => Color::Yellow,
            Self::Noisy => Color::Red,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Moderate => "Moderate",
            Self::Noisy => "Noisy",
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub mean: Color,
    pub median: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        // Mean and median follow the chart's line colors
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            info: Color::Cyan,
            mean: Color::Blue,
            median: Color::Green,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_color_scheme(options, ColorScheme::default())
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Bold and colored, or untouched when colors are disabled
    fn emphasize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color).bold()
        } else {
            text.normal()
        }
    }

    /// Color a rendered table row by the statistic it holds
    fn colorize_row(&self, line: &str) -> String {
        let label = line.trim_start_matches('|').trim_start();
        if line.starts_with('+') {
            self.colorize(line, self.color_scheme.border).to_string()
        } else if label.starts_with("Statistic") {
            self.bold(line).to_string()
        } else if label.starts_with("Mean") {
            self.colorize(line, self.color_scheme.mean).to_string()
        } else if label.starts_with("Median") {
            self.colorize(line, self.color_scheme.median).to_string()
        } else {
            line.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let plain = self.plain_formatter.format_header(title)?;
        Ok(self.emphasize(&plain, self.color_scheme.header).to_string())
    }

    fn format_summary(&self, report: &SummaryReport) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(format!("{} {}", self.bold("Input:"), self.colorize(&report.input.display().to_string(), self.color_scheme.info)));
        lines.push(match &report.chart {
            Some(chart) => format!("{} {}", self.bold("Chart:"), self.colorize(&chart.display().to_string(), self.color_scheme.success)),
            None => format!("{} {}", self.bold("Chart:"), self.colorize("not rendered", self.color_scheme.border)),
        });
        lines.push(String::new());

        let rows = summary_rows(report, self.options.verbose_mode);
        let table = self.plain_formatter.create_table(&summary_table_format(self.options.table_borders), &rows);
        lines.extend(table.lines().map(|line| self.colorize_row(line)));

        if self.options.verbose_mode {
            let spread = SpreadLevel::from_summary(&report.summary);
            lines.push(String::new());
            lines.push(format!(
                "{} {} (std dev {})",
                self.bold("Spread:"),
                self.colorize(spread.description(), spread.color()),
                format_micros(report.summary.std_dev)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", self.emphasize("⚠ Warning:", self.color_scheme.warning), warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn summary(samples: &[i64]) -> SampleSummary {
        SampleSummary::from_samples(samples).unwrap()
    }

    #[test]
    fn test_spread_level_classification() {
        assert_eq!(SpreadLevel::from_summary(&summary(&[100, 100, 100])), SpreadLevel::Stable);
        assert_eq!(SpreadLevel::from_summary(&summary(&[80, 100, 120])), SpreadLevel::Moderate);
        assert_eq!(SpreadLevel::from_summary(&summary(&[10, 100, 1000])), SpreadLevel::Noisy);
        assert_eq!(SpreadLevel::from_summary(&summary(&[0, 0])), SpreadLevel::Stable);
        assert_eq!(SpreadLevel::from_summary(&summary(&[-5, 5])), SpreadLevel::Noisy);
    }

    #[test]
    fn test_colored_summary_with_color_disabled_matches_content() {
        let formatter = ColoredFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: true,
            table_borders: true,
        });
        let report = SummaryReport::new(PathBuf::from("run.csv"), None, summary(&[100, 200, 300, 400]));
        let output = formatter.format_summary(&report).unwrap();

        assert!(!output.contains("\x1b["));
        assert!(output.contains("Input: run.csv"));
        assert!(output.contains("Chart: not rendered"));
        assert!(output.contains("250.00 µs"));
        assert!(output.contains("Spread: Noisy") || output.contains("Spread: Moderate"));
    }

    #[test]
    fn test_colored_summary_emits_ansi() {
        colored::control::set_override(true);
        let formatter = ColoredFormatter::new(FormattingOptions::default());
        let report = SummaryReport::new(PathBuf::from("run.csv"), Some(PathBuf::from("run.png")), summary(&[1, 2, 3]));
        let output = formatter.format_summary(&report).unwrap();
        colored::control::unset_override();

        assert!(output.contains("\x1b["));
        assert!(output.contains("Median"));
    }

    #[test]
    fn test_message_formatting() {
        let formatter = ColoredFormatter::new(FormattingOptions { enable_color: false, ..Default::default() });
        assert_eq!(formatter.format_warning("slow").unwrap(), "⚠ Warning: slow");
    }
}
