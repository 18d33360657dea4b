use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dora::DoraMetrics;

/// Flat per-simulation performance record extracted from a Gatling
/// `stats.json`. Absent fields are zero; a record is never partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub mean_response_time: f64,
    pub percentile_50: f64,
    pub percentile_95: f64,
    pub percentile_99: f64,
    pub total_requests: f64,
    pub successful_requests: f64,
    pub failed_requests: f64,
    pub requests_per_second: f64,
}

/// Percentage deltas between two performance records.
///
/// Response-time improvements are lower-is-better (a candidate undercutting
/// the baseline yields a positive number); throughput is higher-is-better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub mean_response_time_improvement: f64,
    pub percentile_95_improvement: f64,
    pub percentile_99_improvement: f64,
    pub throughput_improvement: f64,
    pub adapt_success_rate: f64,
    pub layered_success_rate: f64,
}

/// Both sides of one scenario plus their comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub adapt: PerformanceRecord,
    pub layered: PerformanceRecord,
    pub comparison: ComparisonResult,
}

/// All compared scenarios for one timestamped benchmark run.
/// Scenarios missing either side are omitted, not errored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub timestamp: String,
    pub scenarios: IndexMap<String, ScenarioComparison>,
}

/// The on-disk analysis report: performance comparison plus the static
/// DORA indicator placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub performance: PerformanceReport,
    pub dora_metrics: DoraMetrics,
}

/// How a profile's services communicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouplingStyle {
    SynchronousTight,
    AsynchronousLoose,
}

impl fmt::Display for CouplingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouplingStyle::SynchronousTight => write!(f, "synchronous_tight"),
            CouplingStyle::AsynchronousLoose => write!(f, "asynchronous_loose"),
        }
    }
}

/// Errors from the maintainability comparator.
///
/// The performance comparator degrades zero denominators to 0; this one
/// does not. Callers must guarantee a nonzero layered baseline.
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("cannot compute {metric}: layered baseline is zero")]
    ZeroBaseline { metric: &'static str },
}

/// Round to 2 decimal places, the precision used for all percentages.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places, the precision used for coupling and
/// cohesion ratios.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_default_is_all_zero() {
        let record = PerformanceRecord::default();
        assert_eq!(record.mean_response_time, 0.0);
        assert_eq!(record.percentile_50, 0.0);
        assert_eq!(record.percentile_95, 0.0);
        assert_eq!(record.percentile_99, 0.0);
        assert_eq!(record.total_requests, 0.0);
        assert_eq!(record.successful_requests, 0.0);
        assert_eq!(record.failed_requests, 0.0);
        assert_eq!(record.requests_per_second, 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(7.333333), 7.33);
        assert_eq!(round2(62.956), 62.96);
        assert_eq!(round2(-12.346), -12.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.16666666), 0.1667);
        assert_eq!(round4(8.0 / 15.0), 0.5333);
        assert_eq!(round4(0.45), 0.45);
    }

    #[test]
    fn test_coupling_style_display() {
        assert_eq!(
            CouplingStyle::SynchronousTight.to_string(),
            "synchronous_tight"
        );
        assert_eq!(
            CouplingStyle::AsynchronousLoose.to_string(),
            "asynchronous_loose"
        );
    }

    #[test]
    fn test_comparison_result_round_trip() {
        let result = ComparisonResult {
            mean_response_time_improvement: 25.0,
            percentile_95_improvement: 12.5,
            percentile_99_improvement: -3.25,
            throughput_improvement: 20.0,
            adapt_success_rate: 99.87,
            layered_success_rate: 97.5,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_record_serializes_with_historical_keys() {
        let record = PerformanceRecord {
            mean_response_time: 150.0,
            ..Default::default()
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["mean_response_time"], 150.0);
        assert!(value.get("percentile_50").is_some());
        assert!(value.get("requests_per_second").is_some());
    }
}
