//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Latency Plot - chart per-iteration benchmark latency with mean and median lines
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "latplot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Sample file, one integer latency (µs) per line [default: iac_benchmark.csv]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Chart image to write; .png or .svg [default: iac_benchmark.png]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart width in pixels [default: 1200]
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Chart height in pixels [default: 600]
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Chart title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Open the chart in the system image viewer after rendering
    #[arg(long)]
    pub open: bool,

    /// Print statistics only, do not render a chart
    #[arg(long)]
    pub summary_only: bool,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// List supported environment variables and exit
    #[arg(long)]
    pub env_help: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.json && self.verbose {
            return Err("Cannot combine --json with --verbose; JSON output must stay machine-readable".to_string());
        }

        if self.summary_only && self.output.is_some() {
            return Err("--output has no effect with --summary-only".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["latplot"]);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.open);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::parse_from([
            "latplot", "-i", "bench.csv", "-o", "out.svg", "--width", "800", "--height", "400",
            "--title", "Broadcast", "--open", "--no-color", "--debug",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("bench.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.width, Some(800));
        assert_eq!(cli.height, Some(400));
        assert_eq!(cli.title.as_deref(), Some("Broadcast"));
        assert!(cli.open && cli.no_color && cli.debug);
    }

    #[test]
    fn test_json_conflicts_with_verbose() {
        let cli = Cli::parse_from(["latplot", "--json", "--verbose"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_output_conflicts_with_summary_only() {
        let cli = Cli::parse_from(["latplot", "--summary-only", "-o", "x.png"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_env_help_flag() {
        let cli = Cli::parse_from(["latplot", "--env-help"]);
        assert!(cli.env_help);
    }

    #[test]
    fn test_invalid_width_rejected_by_parser() {
        assert!(Cli::try_parse_from(["latplot", "--width", "wide"]).is_err());
    }
}
