use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::types::PerformanceRecord;

/// Read a numeric field at a fixed two-level path, defaulting to 0.0 when
/// any level is absent or the leaf is not a number.
fn field(stats: &Value, outer: &str, inner: &str) -> f64 {
    stats
        .get(outer)
        .and_then(|v| v.get(inner))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Extract a performance record from a parsed Gatling `stats.json`.
///
/// Total over any well-typed JSON: every missing or mistyped field becomes
/// exactly 0.0, and all eight fields are always populated.
pub fn parse(stats: &Value) -> PerformanceRecord {
    PerformanceRecord {
        mean_response_time: field(stats, "meanResponseTime", "total"),
        percentile_50: field(stats, "percentiles1", "total"),
        percentile_95: field(stats, "percentiles2", "total"),
        percentile_99: field(stats, "percentiles3", "total"),
        total_requests: field(stats, "numberOfRequests", "total"),
        successful_requests: field(stats, "numberOfRequests", "ok"),
        failed_requests: field(stats, "numberOfRequests", "ko"),
        requests_per_second: field(stats, "meanNumberOfRequestsPerSecond", "total"),
    }
}

/// Load and parse a simulation's `stats.json`.
///
/// A missing file yields the all-zero record; an unreadable or unparseable
/// file is an error.
pub fn load_stats(path: &Path) -> Result<PerformanceRecord> {
    if !path.exists() {
        return Ok(PerformanceRecord::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let stats: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(parse(&stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_stats() -> Value {
        json!({
            "meanResponseTime": { "total": 142.5 },
            "percentiles1": { "total": 120 },
            "percentiles2": { "total": 310 },
            "percentiles3": { "total": 480 },
            "numberOfRequests": { "total": 10000, "ok": 9950, "ko": 50 },
            "meanNumberOfRequestsPerSecond": { "total": 166.67 }
        })
    }

    #[test]
    fn test_parse_full_stats() {
        let record = parse(&full_stats());
        assert_eq!(record.mean_response_time, 142.5);
        assert_eq!(record.percentile_50, 120.0);
        assert_eq!(record.percentile_95, 310.0);
        assert_eq!(record.percentile_99, 480.0);
        assert_eq!(record.total_requests, 10000.0);
        assert_eq!(record.successful_requests, 9950.0);
        assert_eq!(record.failed_requests, 50.0);
        assert_eq!(record.requests_per_second, 166.67);
    }

    #[test]
    fn test_parse_empty_object_defaults_to_zero() {
        let record = parse(&json!({}));
        assert_eq!(record, PerformanceRecord::default());
    }

    #[test]
    fn test_parse_missing_inner_key_defaults_that_field() {
        let stats = json!({
            "meanResponseTime": {},
            "numberOfRequests": { "total": 500 }
        });
        let record = parse(&stats);
        assert_eq!(record.mean_response_time, 0.0);
        assert_eq!(record.total_requests, 500.0);
        assert_eq!(record.successful_requests, 0.0);
    }

    #[test]
    fn test_parse_mistyped_leaf_defaults_to_zero() {
        let stats = json!({
            "meanResponseTime": { "total": "fast" },
            "percentiles2": { "total": null }
        });
        let record = parse(&stats);
        assert_eq!(record.mean_response_time, 0.0);
        assert_eq!(record.percentile_95, 0.0);
    }

    #[test]
    fn test_parse_non_object_input() {
        assert_eq!(parse(&json!(null)), PerformanceRecord::default());
        assert_eq!(parse(&json!([1, 2, 3])), PerformanceRecord::default());
        assert_eq!(parse(&json!(42)), PerformanceRecord::default());
    }

    #[test]
    fn test_load_stats_missing_file_is_zero_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = load_stats(&dir.path().join("js/stats.json")).unwrap();
        assert_eq!(record, PerformanceRecord::default());
    }

    #[test]
    fn test_load_stats_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, full_stats().to_string()).unwrap();
        let record = load_stats(&path).unwrap();
        assert_eq!(record.total_requests, 10000.0);
    }

    #[test]
    fn test_load_stats_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "not json {").unwrap();
        assert!(load_stats(&path).is_err());
    }
}
