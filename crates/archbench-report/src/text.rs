use colored::Colorize;

use archbench_core::maintainability::MaintainabilityReport;
use archbench_core::types::{AnalysisReport, ComparisonResult};

fn colored_pct(value: f64) -> String {
    let formatted = format!("{value:.2}%");
    if value > 0.0 {
        formatted.green().to_string()
    } else if value < 0.0 {
        formatted.red().to_string()
    } else {
        formatted
    }
}

fn format_comparison_lines(comparison: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  Response Time Improvement: {}\n",
        colored_pct(comparison.mean_response_time_improvement)
    ));
    out.push_str(&format!(
        "  P95 Improvement:           {}\n",
        colored_pct(comparison.percentile_95_improvement)
    ));
    out.push_str(&format!(
        "  P99 Improvement:           {}\n",
        colored_pct(comparison.percentile_99_improvement)
    ));
    out.push_str(&format!(
        "  Throughput Improvement:    {}\n",
        colored_pct(comparison.throughput_improvement)
    ));
    out.push_str(&format!(
        "  Success Rate:              adapt {:.2}% / layered {:.2}%\n",
        comparison.adapt_success_rate, comparison.layered_success_rate
    ));
    out
}

/// Format a full performance analysis report for terminal output.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        "archbench - Performance Analysis".bold()
    ));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));
    out.push_str(&format!(
        "{}: {}\n",
        "Run".bold(),
        report.performance.timestamp
    ));

    if report.performance.scenarios.is_empty() {
        out.push_str("\nNo complete scenario results found.\n");
    } else {
        for (scenario, data) in &report.performance.scenarios {
            out.push_str(&format!("\n{}\n", scenario.bold()));
            out.push_str(&format_comparison_lines(&data.comparison));
        }
    }

    let dora = &report.dora_metrics;
    out.push_str(&format!(
        "\n{}\n{}\n",
        "DORA Indicators".bold(),
        "-".repeat(40)
    ));
    for (label, indicator) in [
        ("Deployment Frequency ", &dora.deployment_frequency),
        ("Lead Time for Changes", &dora.lead_time_for_changes),
        ("Change Failure Rate  ", &dora.change_failure_rate),
        ("MTTR                 ", &dora.mttr),
    ] {
        out.push_str(&format!("  {label}  winner: {}\n", indicator.winner));
    }

    out.push('\n');
    out
}

/// Format a maintainability report for terminal output.
pub fn format_maintainability(report: &MaintainabilityReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        "archbench - Maintainability Metrics".bold()
    ));
    out.push_str(&format!("{}\n", "=".repeat(40)));

    for metrics in [&report.layered, &report.adapt] {
        let sc = &metrics.structural_coupling;
        let wsic = &metrics.wsic;
        let sidc = &metrics.sidc;

        out.push_str(&format!("\n{}\n", sc.architecture.bold()));
        out.push_str(&format!(
            "  Structural Coupling: {:.4} ({}/{} dependencies, {})\n",
            sc.structural_coupling,
            sc.dependencies_count,
            sc.possible_dependencies,
            sc.coupling_type,
        ));
        out.push_str(&format!(
            "  WSIC:                {:.2} across {} interfaces (avg {:.2})\n",
            wsic.wsic, wsic.total_interfaces, wsic.avg_methods_per_interface
        ));
        out.push_str(&format!(
            "  SIDC:                {:.4} ({}/{} cohesive operations)\n",
            sidc.sidc, sidc.cohesive_operations, sidc.total_operations
        ));
    }

    let comparison = &report.comparison;
    out.push_str(&format!(
        "\n{}\n{}\n",
        "Comparison".bold(),
        "-".repeat(40)
    ));
    out.push_str(&format!(
        "  Structural Coupling Improvement: {}\n",
        colored_pct(comparison.sc_improvement)
    ));
    out.push_str(&format!(
        "  WSIC Reduction:                  {}\n",
        colored_pct(comparison.wsic_reduction)
    ));
    out.push_str(&format!(
        "  SIDC Improvement:                {}\n",
        colored_pct(comparison.sidc_improvement)
    ));

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use archbench_core::compare;
    use archbench_core::dora::DoraMetrics;
    use archbench_core::maintainability;
    use archbench_core::profiles::ProfilesConfig;
    use archbench_core::types::{PerformanceRecord, PerformanceReport, ScenarioComparison};
    use indexmap::IndexMap;

    fn sample_report(with_scenarios: bool) -> AnalysisReport {
        let mut scenarios = IndexMap::new();
        if with_scenarios {
            let adapt = PerformanceRecord {
                mean_response_time: 150.0,
                requests_per_second: 120.0,
                total_requests: 100.0,
                successful_requests: 100.0,
                ..Default::default()
            };
            let layered = PerformanceRecord {
                mean_response_time: 200.0,
                requests_per_second: 100.0,
                total_requests: 100.0,
                successful_requests: 98.0,
                ..Default::default()
            };
            let comparison = compare::compare(&adapt, &layered);
            scenarios.insert(
                "OrderFlowSimulation".to_string(),
                ScenarioComparison {
                    adapt,
                    layered,
                    comparison,
                },
            );
        }
        AnalysisReport {
            performance: PerformanceReport {
                timestamp: "20250110_0900".to_string(),
                scenarios,
            },
            dora_metrics: DoraMetrics::default(),
        }
    }

    #[test]
    fn test_report_contains_scenario_and_run() {
        let text = format_report(&sample_report(true));
        assert!(text.contains("20250110_0900"));
        assert!(text.contains("OrderFlowSimulation"));
        assert!(text.contains("Response Time Improvement"));
        assert!(text.contains("Throughput Improvement"));
        assert!(text.contains("DORA Indicators"));
    }

    #[test]
    fn test_report_empty_scenarios_message() {
        let text = format_report(&sample_report(false));
        assert!(text.contains("No complete scenario results found."));
    }

    #[test]
    fn test_maintainability_contains_both_architectures() {
        let report = maintainability::report(&ProfilesConfig::default()).unwrap();
        let text = format_maintainability(&report);
        assert!(text.contains("layered"));
        assert!(text.contains("adapt"));
        assert!(text.contains("Structural Coupling Improvement"));
        assert!(text.contains("WSIC Reduction"));
        assert!(text.contains("SIDC Improvement"));
    }

    #[test]
    fn test_maintainability_shows_ratio_precision() {
        let report = maintainability::report(&ProfilesConfig::default()).unwrap();
        let text = format_maintainability(&report);
        assert!(text.contains("0.4500"));
        assert!(text.contains("0.5333"));
    }
}
