//! Comprehensive tests for latency statistics
//!
//! Property-based tests over generated sample sets plus the loader-to-summary
//! path that the chart depends on.

use super::*;
use crate::loader::parse_samples;
use proptest::prelude::*;
use proptest::collection::vec;
use std::io::Cursor;

/// Property-based test generators
mod generators {
    use super::*;

    /// Plausible microsecond latencies, including the occasional negative clock skew
    pub fn latency() -> impl Strategy<Value = Sample> {
        prop_oneof![
            9 => 0i64..10_000_000,
            1 => -1_000i64..0,
        ]
    }

    pub fn latency_vectors() -> impl Strategy<Value = Vec<Sample>> {
        vec(latency(), 1..500)
    }

    /// Samples paired with how many blank lines follow each one
    pub fn file_lines() -> impl Strategy<Value = Vec<(Sample, usize)>> {
        vec((latency(), 0usize..3), 1..200)
    }
}

mod property_tests {
    use super::*;

    proptest! {
        /// Mean should always be between min and max
        #[test]
        fn mean_between_min_max(samples in generators::latency_vectors()) {
            let summary = SampleSummary::from_samples(&samples).unwrap();
            prop_assert!(summary.mean >= summary.min as f64);
            prop_assert!(summary.mean <= summary.max as f64);
        }

        /// Mean equals sum over count
        #[test]
        fn mean_is_sum_over_count(samples in generators::latency_vectors()) {
            let expected = samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64;
            let actual = mean(&samples).unwrap();
            prop_assert!((actual - expected).abs() <= 1e-6 * expected.abs().max(1.0));
        }

        /// Half the samples lie on each side of the median
        #[test]
        fn median_splits_samples(samples in generators::latency_vectors()) {
            let m = median(&samples).unwrap();
            let below = samples.iter().filter(|&&s| (s as f64) < m).count();
            let above = samples.iter().filter(|&&s| (s as f64) > m).count();
            prop_assert!(below <= samples.len() / 2);
            prop_assert!(above <= samples.len() / 2);
        }

        /// The 50th percentile is the median
        #[test]
        fn median_matches_p50(samples in generators::latency_vectors()) {
            let m = median(&samples).unwrap();
            let p50 = percentile(&samples, 50.0).unwrap();
            prop_assert!((m - p50).abs() < 1e-9);
        }

        /// Percentiles never decrease
        #[test]
        fn percentiles_monotonic(samples in generators::latency_vectors()) {
            let summary = SampleSummary::from_samples(&samples).unwrap();
            prop_assert!(summary.median <= summary.p95 + 1e-9);
            prop_assert!(summary.p95 <= summary.p99 + 1e-9);
            prop_assert!(summary.p99 <= summary.max as f64);
        }

        /// Standard deviation should be non-negative and finite
        #[test]
        fn standard_deviation_non_negative(samples in generators::latency_vectors()) {
            let value = std_dev(&samples).unwrap();
            prop_assert!(value >= 0.0);
            prop_assert!(value.is_finite());
        }

        /// Summary does not depend on sample order
        #[test]
        fn summary_order_independent(samples in generators::latency_vectors()) {
            let mut reversed = samples.clone();
            reversed.reverse();
            let a = SampleSummary::from_samples(&samples).unwrap();
            let b = SampleSummary::from_samples(&reversed).unwrap();
            prop_assert_eq!(a.median, b.median);
            prop_assert_eq!(a.min, b.min);
            prop_assert_eq!(a.max, b.max);
            prop_assert!((a.mean - b.mean).abs() < 1e-6);
        }

        /// Loader keeps exactly the integers, in file order, whatever blank lines surround them
        #[test]
        fn loader_preserves_order_with_blank_lines(lines in generators::file_lines()) {
            let mut text = String::new();
            for (sample, blanks) in &lines {
                text.push_str(&sample.to_string());
                text.push('\n');
                for _ in 0..*blanks {
                    text.push('\n');
                }
            }

            let parsed = parse_samples(Cursor::new(text)).unwrap();
            let expected: Vec<Sample> = lines.iter().map(|(s, _)| *s).collect();
            prop_assert_eq!(parsed, expected);
        }
    }
}

/// Test edge cases and boundary conditions
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_scenario_three_samples() {
        let samples = parse_samples(Cursor::new("10\n20\n30\n")).unwrap();
        assert_eq!(samples, vec![10, 20, 30]);
        assert_eq!(mean(&samples).unwrap(), 20.0);
        assert_eq!(median(&samples).unwrap(), 20.0);
    }

    #[test]
    fn test_scenario_blank_line_between_samples() {
        let samples = parse_samples(Cursor::new("5\n\n15\n")).unwrap();
        assert_eq!(samples, vec![5, 15]);
        assert_eq!(mean(&samples).unwrap(), 10.0);
        assert_eq!(median(&samples).unwrap(), 10.0);
    }

    #[test]
    fn test_scenario_empty_file_fails_statistics() {
        let samples = parse_samples(Cursor::new("")).unwrap();
        assert!(samples.is_empty());
        assert!(matches!(SampleSummary::from_samples(&samples), Err(AppError::Statistics(_))));
    }

    #[test]
    fn test_identical_samples() {
        let summary = SampleSummary::from_samples(&[250; 64]).unwrap();
        assert_eq!(summary.mean, 250.0);
        assert_eq!(summary.median, 250.0);
        assert_eq!(summary.p95, 250.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_extreme_values() {
        let summary = SampleSummary::from_samples(&[i64::MIN, i64::MAX]).unwrap();
        assert_eq!(summary.range(), u64::MAX as i128);
        assert!(summary.mean.abs() <= 1.0);
    }

    #[test]
    fn test_outlier_moves_mean_not_median() {
        let summary = SampleSummary::from_samples(&[100, 101, 99, 100, 10_000]).unwrap();
        assert_eq!(summary.median, 100.0);
        assert!(summary.mean > 2_000.0);
    }
}
