//! Data models and structures for the latency plotter

pub mod config;
pub mod samples;

// Re-export main model types
pub use config::Config;
pub use samples::SampleSeries;
