use crate::types::{round2, ComparisonResult, PerformanceRecord};

/// Percentage improvement for a lower-is-better metric. Zero baselines
/// degrade to 0 rather than erroring.
fn lower_is_better(candidate: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        round2((baseline - candidate) / baseline * 100.0)
    } else {
        0.0
    }
}

/// Success percentage with the historical `max(total, 1)` denominator
/// guard: a side with zero requests reports a degenerate 0%, not an error.
fn success_rate(record: &PerformanceRecord) -> f64 {
    round2(record.successful_requests / record.total_requests.max(1.0) * 100.0)
}

/// Compare two performance records, candidate (ADAPT) against baseline
/// (Layered). Pure and total: every zero denominator is guarded.
pub fn compare(candidate: &PerformanceRecord, baseline: &PerformanceRecord) -> ComparisonResult {
    // Throughput is the one higher-is-better delta.
    let throughput_improvement = if baseline.requests_per_second > 0.0 {
        round2(
            (candidate.requests_per_second - baseline.requests_per_second)
                / baseline.requests_per_second
                * 100.0,
        )
    } else {
        0.0
    };

    ComparisonResult {
        mean_response_time_improvement: lower_is_better(
            candidate.mean_response_time,
            baseline.mean_response_time,
        ),
        percentile_95_improvement: lower_is_better(
            candidate.percentile_95,
            baseline.percentile_95,
        ),
        percentile_99_improvement: lower_is_better(
            candidate.percentile_99,
            baseline.percentile_99,
        ),
        throughput_improvement,
        adapt_success_rate: success_rate(candidate),
        layered_success_rate: success_rate(baseline),
    }
}
