use archbench_core::maintainability::MaintainabilityReport;
use archbench_core::types::AnalysisReport;

/// Format a full performance analysis report as Markdown.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# archbench - Performance Analysis\n\n");
    out.push_str(&format!("**Run:** {}\n", report.performance.timestamp));

    if report.performance.scenarios.is_empty() {
        out.push_str("\nNo complete scenario results found.\n");
    }

    for (scenario, data) in &report.performance.scenarios {
        out.push_str(&format!("\n## {scenario}\n\n"));
        out.push_str("| Metric | Value |\n");
        out.push_str("|--------|-------|\n");
        let c = &data.comparison;
        out.push_str(&format!(
            "| Mean Response Time Improvement | {:.2}% |\n",
            c.mean_response_time_improvement
        ));
        out.push_str(&format!(
            "| P95 Improvement | {:.2}% |\n",
            c.percentile_95_improvement
        ));
        out.push_str(&format!(
            "| P99 Improvement | {:.2}% |\n",
            c.percentile_99_improvement
        ));
        out.push_str(&format!(
            "| Throughput Improvement | {:.2}% |\n",
            c.throughput_improvement
        ));
        out.push_str(&format!(
            "| ADAPT Success Rate | {:.2}% |\n",
            c.adapt_success_rate
        ));
        out.push_str(&format!(
            "| Layered Success Rate | {:.2}% |\n",
            c.layered_success_rate
        ));
    }

    let dora = &report.dora_metrics;
    out.push_str("\n## DORA Indicators\n\n");
    out.push_str("| Indicator | ADAPT | Layered | Winner |\n");
    out.push_str("|-----------|-------|---------|--------|\n");
    for (label, indicator) in [
        ("Deployment Frequency", &dora.deployment_frequency),
        ("Lead Time for Changes", &dora.lead_time_for_changes),
        ("Change Failure Rate", &dora.change_failure_rate),
        ("MTTR", &dora.mttr),
    ] {
        out.push_str(&format!(
            "| {label} | {} | {} | {} |\n",
            indicator.adapt, indicator.layered, indicator.winner
        ));
    }

    out.push('\n');
    out
}

/// Format a maintainability report as Markdown.
pub fn format_maintainability(report: &MaintainabilityReport) -> String {
    let mut out = String::new();

    out.push_str("# archbench - Maintainability Metrics\n\n");

    out.push_str("## Metrics\n\n");
    out.push_str("| Metric | Layered | ADAPT |\n");
    out.push_str("|--------|---------|-------|\n");
    out.push_str(&format!(
        "| Structural Coupling | {:.4} | {:.4} |\n",
        report.layered.structural_coupling.structural_coupling,
        report.adapt.structural_coupling.structural_coupling
    ));
    out.push_str(&format!(
        "| WSIC | {:.2} | {:.2} |\n",
        report.layered.wsic.wsic, report.adapt.wsic.wsic
    ));
    out.push_str(&format!(
        "| SIDC | {:.4} | {:.4} |\n",
        report.layered.sidc.sidc, report.adapt.sidc.sidc
    ));

    out.push_str("\n## Comparison\n\n");
    out.push_str("| Delta | Value |\n");
    out.push_str("|-------|-------|\n");
    out.push_str(&format!(
        "| Structural Coupling Improvement | {:.2}% |\n",
        report.comparison.sc_improvement
    ));
    out.push_str(&format!(
        "| WSIC Reduction | {:.2}% |\n",
        report.comparison.wsic_reduction
    ));
    out.push_str(&format!(
        "| SIDC Improvement | {:.2}% |\n",
        report.comparison.sidc_improvement
    ));

    out.push('\n');
    out
}
