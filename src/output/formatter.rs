//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! a plain text implementation with table formatting capabilities.

use crate::error::{AppError, Result};
use super::SummaryReport;
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the statistics table for a run
    fn format_summary(&self, report: &SummaryReport) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Add the spread classification and range rows
    pub verbose_mode: bool,
    /// Show table borders
    pub table_borders: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
            table_borders: true,
        }
    }
}

/// Table formatting configuration
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Show borders around table
    pub show_borders: bool,
    /// Show header row
    pub show_header: bool,
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
    /// Minimum width
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, alignment: Alignment, min_width: usize) -> Self {
        Self { header: header.to_string(), alignment, min_width }
    }
}

/// Text alignment options
#[derive(Debug, Clone, Copy)]
pub enum Alignment {
    Left,
    Right,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

/// Statistic rows shared by the plain and colored formatters
pub(crate) fn summary_rows(report: &SummaryReport, verbose: bool) -> Vec<RowData> {
    let s = &report.summary;
    let mut rows = vec![
        vec!["Samples".to_string(), s.count.to_string()],
        vec!["Mean".to_string(), format_micros(s.mean)],
        vec!["Median".to_string(), format_micros(s.median)],
        vec!["Min".to_string(), format!("{} µs", s.min)],
        vec!["Max".to_string(), format!("{} µs", s.max)],
        vec!["Std Dev".to_string(), format_micros(s.std_dev)],
        vec!["P95".to_string(), format_micros(s.p95)],
        vec!["P99".to_string(), format_micros(s.p99)],
    ];

    if verbose {
        rows.push(vec!["Range".to_string(), format!("{} µs", s.range())]);
    }

    rows
}

/// Latency with two decimals and unit
pub fn format_micros(value: f64) -> String {
    format!("{:.2} µs", value)
}

pub(crate) fn summary_table_format(show_borders: bool) -> TableFormat {
    TableFormat {
        columns: vec![
            Column::new("Statistic", Alignment::Left, 9),
            Column::new("Value", Alignment::Right, 12),
        ],
        show_borders,
        show_header: true,
    }
}

fn fmt_err(e: std::fmt::Error) -> AppError {
    AppError::internal(format!("Failed to format output: {}", e))
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Create a table with the given format and data
    pub(crate) fn create_table(&self, format: &TableFormat, rows: &[RowData]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let column_widths = Self::calculate_column_widths(format, rows);
        let mut output = String::new();

        if format.show_header && !format.columns.is_empty() {
            if format.show_borders {
                output.push_str(&Self::create_horizontal_border(&column_widths));
                output.push('\n');
            }

            let headers: Vec<String> = format.columns.iter().map(|c| c.header.clone()).collect();
            output.push_str(&Self::create_row(&headers, &column_widths, format));
            output.push('\n');

            if format.show_borders {
                output.push_str(&Self::create_horizontal_border(&column_widths));
                output.push('\n');
            }
        }

        for row in rows {
            output.push_str(&Self::create_row(row, &column_widths, format));
            output.push('\n');
        }

        if format.show_borders {
            output.push_str(&Self::create_horizontal_border(&column_widths));
        }

        output.trim_end().to_string()
    }

    /// Widest cell per column, measured in characters
    fn calculate_column_widths(format: &TableFormat, rows: &[RowData]) -> Vec<usize> {
        let num_columns = format.columns.len().max(
            rows.iter().map(|r| r.len()).max().unwrap_or(0)
        );

        (0..num_columns)
            .map(|col_idx| {
                let header_width = format.columns.get(col_idx)
                    .map(|c| c.min_width.max(c.header.chars().count()))
                    .unwrap_or(0);
                rows.iter()
                    .filter_map(|row| row.get(col_idx))
                    .map(|cell| cell.chars().count())
                    .fold(header_width, usize::max)
            })
            .collect()
    }

    fn create_row(data: &[String], widths: &[usize], format: &TableFormat) -> String {
        let mut row = String::new();

        if format.show_borders {
            row.push('|');
        }

        for (idx, (cell, &width)) in data.iter().zip(widths.iter()).enumerate() {
            let alignment = format.columns.get(idx)
                .map(|c| c.alignment)
                .unwrap_or(Alignment::Left);

            if format.show_borders {
                row.push(' ');
            }
            row.push_str(&Self::align_text(cell, width, alignment));
            if format.show_borders {
                row.push_str(" |");
            } else {
                row.push_str("  ");
            }
        }

        row.trim_end().to_string()
    }

    fn create_horizontal_border(widths: &[usize]) -> String {
        let mut border = String::new();

        if !widths.is_empty() {
            border.push('+');
            for &width in widths {
                border.push_str(&"-".repeat(width + 2));
                border.push('+');
            }
        }

        border
    }

    /// Align text within specified width
    fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_string();
        }

        let padding = " ".repeat(width - len);
        match alignment {
            Alignment::Left => format!("{}{}", text, padding),
            Alignment::Right => format!("{}{}", padding, text),
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(title.chars().count() + 4);

        writeln!(output, "{}", border).map_err(fmt_err)?;
        writeln!(output, "  {}  ", title).map_err(fmt_err)?;
        write!(output, "{}", border).map_err(fmt_err)?;

        Ok(output)
    }

    fn format_summary(&self, report: &SummaryReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Input:  {}", report.input.display()).map_err(fmt_err)?;
        match &report.chart {
            Some(chart) => writeln!(output, "Chart:  {}", chart.display()).map_err(fmt_err)?,
            None => writeln!(output, "Chart:  not rendered").map_err(fmt_err)?,
        }
        writeln!(output).map_err(fmt_err)?;

        let rows = summary_rows(report, self.options.verbose_mode);
        output.push_str(&self.create_table(&summary_table_format(self.options.table_borders), &rows));

        Ok(output)
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SampleSummary;
    use std::path::PathBuf;

    fn report() -> SummaryReport {
        SummaryReport::new(
            PathBuf::from("iac_benchmark.csv"),
            Some(PathBuf::from("iac_benchmark.png")),
            SampleSummary::from_samples(&[100, 200, 300]).unwrap(),
        )
    }

    #[test]
    fn test_plain_summary_lists_every_statistic() {
        let formatter = PlainFormatter::new(FormattingOptions { enable_color: false, ..Default::default() });
        let output = formatter.format_summary(&report()).unwrap();

        assert!(output.contains("Input:  iac_benchmark.csv"));
        assert!(output.contains("Chart:  iac_benchmark.png"));
        for label in ["Samples", "Mean", "Median", "Min", "Max", "Std Dev", "P95", "P99"] {
            assert!(output.contains(label), "missing {}", label);
        }
        assert!(output.contains("200.00 µs"));
        assert!(!output.contains("Range"));
    }

    #[test]
    fn test_verbose_adds_range() {
        let formatter = PlainFormatter::new(FormattingOptions { verbose_mode: true, ..Default::default() });
        let output = formatter.format_summary(&report()).unwrap();
        assert!(output.contains("Range"));
        assert!(output.contains("200 µs"));
    }

    #[test]
    fn test_summary_without_chart() {
        let mut report = report();
        report.chart = None;
        let output = PlainFormatter::new(FormattingOptions::default()).format_summary(&report).unwrap();
        assert!(output.contains("Chart:  not rendered"));
    }

    #[test]
    fn test_table_rows_share_width() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let rows = vec![
            vec!["Mean".to_string(), "1.00 µs".to_string()],
            vec!["Median".to_string(), "12345.00 µs".to_string()],
        ];
        let table = formatter.create_table(&summary_table_format(true), &rows);

        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", table);
        assert!(table.starts_with("+-"));
    }

    #[test]
    fn test_borderless_table() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let table = formatter.create_table(&summary_table_format(false), &[vec!["P99".to_string(), "9.00 µs".to_string()]]);
        assert!(!table.contains('|'));
        assert!(table.lines().next().unwrap().starts_with("Statistic"));
    }

    #[test]
    fn test_header() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let header = formatter.format_header("Latency").unwrap();
        assert_eq!(header, "===========\n  Latency  \n===========");
    }
}
