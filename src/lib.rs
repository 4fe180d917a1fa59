//! Latency Plot
//!
//! Reads per-iteration latency samples (one integer per line, microseconds)
//! produced by a benchmark harness and renders them as a time-series chart
//! annotated with the mean and median latency.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod output;
pub mod plot;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use loader::{load_samples, parse_samples};
pub use models::{Config, SampleSeries};
pub use plot::{PlotModel, render_chart};
pub use stats::SampleSummary;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata recorded by `build.rs`
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");

/// Full version line including build metadata
pub fn version_line() -> String {
    match GIT_COMMIT {
        Some(commit) => format!("{} v{} ({}, {}, built {})", PKG_NAME, VERSION, commit, TARGET_TRIPLE, BUILD_TIME),
        None => format!("{} v{} ({}, built {})", PKG_NAME, VERSION, TARGET_TRIPLE, BUILD_TIME),
    }
}

/// Default configuration values
pub mod defaults {
    /// Input file written by the benchmark harness
    pub const DEFAULT_INPUT: &str = "iac_benchmark.csv";
    pub const DEFAULT_OUTPUT: &str = "iac_benchmark.png";

    /// Figure is 12x6 units at 100 pixels per unit
    pub const DEFAULT_WIDTH: u32 = 1200;
    pub const DEFAULT_HEIGHT: u32 = 600;
    pub const MIN_DIMENSION: u32 = 200;
    pub const MAX_DIMENSION: u32 = 8000;

    pub const DEFAULT_TITLE: &str = "Latency per Iteration (µs)";
    pub const X_LABEL: &str = "Iteration";
    pub const Y_LABEL: &str = "Latency (µs)";

    pub const DEFAULT_ENABLE_COLOR: bool = true;
    pub const DEFAULT_OPEN_VIEWER: bool = false;
}
