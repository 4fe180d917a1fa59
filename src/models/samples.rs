//! Ordered latency sample series

use crate::types::Sample;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Latency samples in file order; index is the iteration number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleSeries {
    source: Option<PathBuf>,
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { source: None, samples }
    }

    /// Attach the file the samples were read from
    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(iteration, latency)` pairs starting at iteration 0
    pub fn points(&self) -> impl Iterator<Item = (usize, Sample)> + '_ {
        self.samples.iter().copied().enumerate()
    }
}

impl From<Vec<Sample>> for SampleSeries {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}
