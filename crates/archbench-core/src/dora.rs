use serde::{Deserialize, Serialize};

/// One DORA indicator: qualitative values per architecture and the
/// expected winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoraIndicator {
    pub adapt: String,
    pub layered: String,
    pub winner: String,
}

impl DoraIndicator {
    fn new(adapt: &str, layered: &str, winner: &str) -> Self {
        Self {
            adapt: adapt.to_string(),
            layered: layered.to_string(),
            winner: winner.to_string(),
        }
    }
}

/// Static DORA indicator placeholders for the case study.
///
/// Illustrative text only; nothing here is derived from git history or
/// deployment records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoraMetrics {
    pub deployment_frequency: DoraIndicator,
    pub lead_time_for_changes: DoraIndicator,
    pub change_failure_rate: DoraIndicator,
    pub mttr: DoraIndicator,
}

impl Default for DoraMetrics {
    fn default() -> Self {
        Self {
            deployment_frequency: DoraIndicator::new(
                "Multiple deploys per day (microservices)",
                "Weekly deploys (monolith)",
                "ADAPT",
            ),
            lead_time_for_changes: DoraIndicator::new(
                "< 1 hour (independent services)",
                "1-2 days (full regression testing)",
                "ADAPT",
            ),
            change_failure_rate: DoraIndicator::new(
                "< 5% (isolated changes)",
                "15-20% (cascading failures)",
                "ADAPT",
            ),
            mttr: DoraIndicator::new(
                "< 30 minutes (rollback single service)",
                "2-4 hours (full system rollback)",
                "ADAPT",
            ),
        }
    }
}
