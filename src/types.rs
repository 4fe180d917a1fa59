//! Type definitions and aliases

use std::path::Path;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// A single latency measurement in microseconds
pub type Sample = i64;

/// Image formats the chart can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Raster bitmap
    Png,
    /// Vector graphics
    Svg,
}

impl ImageFormat {
    /// Pick the format from the output file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some(other) => Err(AppError::config(format!(
                "Unsupported output format '.{}' for {} (expected .png or .svg)",
                other,
                path.display()
            ))),
            None => Err(AppError::config(format!(
                "Output path {} has no extension (expected .png or .svg)",
                path.display()
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
        }
    }
}
