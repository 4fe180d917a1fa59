//! Statistics over latency samples
//!
//! Mean and median drive the chart's reference lines; the remaining figures
//! feed the console summary.

use crate::{
    error::{AppError, Result},
    models::SampleSeries,
    types::Sample,
};
use serde::{Deserialize, Serialize};

/// Summary statistics for a sample series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean (µs)
    pub mean: f64,
    /// Median (µs); average of the two middle values for even counts
    pub median: f64,
    /// Smallest sample (µs)
    pub min: Sample,
    /// Largest sample (µs)
    pub max: Sample,
    /// Population standard deviation (µs)
    pub std_dev: f64,
    /// 95th percentile (µs)
    pub p95: f64,
    /// 99th percentile (µs)
    pub p99: f64,
}

impl SampleSummary {
    /// Summarize raw samples; fails on empty input
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        ensure_not_empty(samples)?;

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let mean = mean(samples)?;

        Ok(Self {
            count: samples.len(),
            mean,
            median: median_of_sorted(&sorted),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            std_dev: std_dev_with_mean(samples, mean),
            p95: percentile_of_sorted(&sorted, 95.0),
            p99: percentile_of_sorted(&sorted, 99.0),
        })
    }

    /// Summarize a loaded series
    pub fn from_series(series: &SampleSeries) -> Result<Self> {
        Self::from_samples(series.samples()).map_err(|e| match (e, series.source()) {
            (AppError::Statistics(msg), Some(source)) => {
                AppError::statistics(format!("{} ({})", msg, source.display()))
            }
            (e, _) => e,
        })
    }

    /// Spread between the fastest and slowest sample
    pub fn range(&self) -> i128 {
        self.max as i128 - self.min as i128
    }
}

fn ensure_not_empty(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(AppError::statistics("no samples to summarize; mean and median are undefined"));
    }
    Ok(())
}

/// Arithmetic mean
pub fn mean(samples: &[Sample]) -> Result<f64> {
    ensure_not_empty(samples)?;
    // i128 cannot overflow for any realistic count of i64 values
    let sum: i128 = samples.iter().map(|&s| s as i128).sum();
    Ok(sum as f64 / samples.len() as f64)
}

/// Median; average of the two middle values for even-length input
pub fn median(samples: &[Sample]) -> Result<f64> {
    ensure_not_empty(samples)?;
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    Ok(median_of_sorted(&sorted))
}

/// Linearly interpolated percentile, `p` in `[0, 100]`
pub fn percentile(samples: &[Sample], p: f64) -> Result<f64> {
    ensure_not_empty(samples)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(AppError::validation(format!("Percentile must be within 0..=100, got {}", p)));
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    Ok(percentile_of_sorted(&sorted, p))
}

/// Population standard deviation
pub fn std_dev(samples: &[Sample]) -> Result<f64> {
    let mean = mean(samples)?;
    Ok(std_dev_with_mean(samples, mean))
}

fn median_of_sorted(sorted: &[Sample]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn percentile_of_sorted(sorted: &[Sample], p: f64) -> f64 {
    let index = (p / 100.0) * (sorted.len() as f64 - 1.0);
    let lower_index = index.floor() as usize;
    let upper_index = index.ceil() as usize;

    if lower_index == upper_index {
        sorted[lower_index] as f64
    } else {
        let lower_value = sorted[lower_index] as f64;
        let upper_value = sorted[upper_index] as f64;
        let weight = index - lower_index as f64;
        lower_value + weight * (upper_value - lower_value)
    }
}

fn std_dev_with_mean(samples: &[Sample], mean: f64) -> f64 {
    let variance = samples
        .iter()
        .map(|&s| {
            let diff = s as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

// Property-based and edge case tests
#[cfg(test)]
mod comprehensive_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_count_summary() {
        let summary = SampleSummary::from_samples(&[10, 20, 30]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
        assert_eq!((summary.min, summary.max), (10, 30));
    }

    #[test]
    fn test_even_count_median_averages_middle() {
        let summary = SampleSummary::from_samples(&[5, 15]).unwrap();
        assert_eq!(summary.mean, 10.0);
        assert_eq!(summary.median, 10.0);

        assert_eq!(median(&[4, 1, 3, 2]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_ignores_input_order() {
        assert_eq!(median(&[30, 10, 20]).unwrap(), 20.0);
    }

    #[test]
    fn test_empty_input_is_statistics_error() {
        assert!(matches!(mean(&[]), Err(AppError::Statistics(_))));
        assert!(matches!(median(&[]), Err(AppError::Statistics(_))));
        assert!(matches!(SampleSummary::from_samples(&[]), Err(AppError::Statistics(_))));
    }

    #[test]
    fn test_empty_series_error_names_source() {
        let series = SampleSeries::new(vec![]).with_source("iac_benchmark.csv");
        let err = SampleSummary::from_series(&series).unwrap_err();
        assert!(err.to_string().contains("iac_benchmark.csv"));
    }

    #[test]
    fn test_single_sample() {
        let summary = SampleSummary::from_samples(&[42]).unwrap();
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.p99, 42.0);
        assert_eq!(summary.range(), 0);
    }

    #[test]
    fn test_negative_and_zero_values_accepted() {
        let summary = SampleSummary::from_samples(&[-10, 0, 10]).unwrap();
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert_eq!(summary.min, -10);
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let value = mean(&[i64::MAX, i64::MAX]).unwrap();
        assert_eq!(value, i64::MAX as f64);
    }

    #[test]
    fn test_percentile_interpolates() {
        let samples: Vec<Sample> = (1..=101).collect();
        assert_eq!(percentile(&samples, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&samples, 50.0).unwrap(), 51.0);
        assert_eq!(percentile(&samples, 95.0).unwrap(), 96.0);
        assert_eq!(percentile(&samples, 100.0).unwrap(), 101.0);

        assert_eq!(percentile(&[10, 20], 50.0).unwrap(), 15.0);
    }

    #[test]
    fn test_percentile_out_of_range_rejected() {
        assert!(matches!(percentile(&[1], 101.0), Err(AppError::Validation(_))));
        assert!(matches!(percentile(&[1], -1.0), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_population_std_dev() {
        let value = std_dev(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((value - 2.0).abs() < 1e-12);
    }
}
