//! Sample file loading
//!
//! The benchmark harness writes one integer latency (microseconds) per line.
//! Despite the `.csv` name there is no header and no column splitting: each
//! non-blank line, trimmed, must parse as a base-10 integer. Loading stops at
//! the first malformed line.

use crate::{
    error::{AppError, ErrorContext, Result},
    models::SampleSeries,
    types::Sample,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse samples from any line-oriented reader
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| AppError::io(format!("Failed to read line {}: {}", line_number, e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let sample = trimmed.parse::<Sample>().map_err(|e| {
            AppError::parse(format!("line {}: invalid latency '{}': {}", line_number, trimmed, e))
        })?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Load the sample file at `path`
///
/// The file handle is dropped before this returns.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<SampleSeries> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Cannot open sample file {}", path.display()))?;

    let samples = parse_samples(BufReader::new(file)).map_err(|e| match e {
        AppError::Parse(msg) => AppError::parse(format!("{}: {}", path.display(), msg)),
        AppError::Io(msg) => AppError::io(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    Ok(SampleSeries::new(samples).with_source(path))
}
