use archbench_core::maintainability::MaintainabilityReport;
use archbench_core::types::AnalysisReport;

/// Format a full performance analysis report as JSON.
pub fn format_report(report: &AnalysisReport, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("AnalysisReport should be serializable")
    } else {
        serde_json::to_string_pretty(report).expect("AnalysisReport should be serializable")
    }
}

/// Format a maintainability report as JSON.
pub fn format_maintainability(report: &MaintainabilityReport, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("MaintainabilityReport should be serializable")
    } else {
        serde_json::to_string_pretty(report).expect("MaintainabilityReport should be serializable")
    }
}
