use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::compare;
use crate::config::PerformanceConfig;
use crate::gatling;
use crate::types::{PerformanceReport, ScenarioComparison};

/// List timestamp subdirectories of a results root, sorted ascending.
/// Unreadable entries are skipped.
pub fn list_timestamps(results_root: &Path) -> Vec<String> {
    let mut timestamps: Vec<String> = WalkDir::new(results_root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    timestamps.sort();
    timestamps
}

/// The most recent timestamp directory, by lexicographic order of the
/// timestamp names.
pub fn latest_timestamp(results_root: &Path) -> Option<String> {
    list_timestamps(results_root).pop()
}

/// Collect the comparison report for one timestamp directory.
///
/// Each configured scenario needs both a `<candidate_prefix>_<scenario>`
/// and a `<baseline_prefix>_<scenario>` subdirectory; scenarios missing
/// either side are skipped silently, so a partial report is valid output.
pub fn collect_report(
    results_root: &Path,
    timestamp: &str,
    config: &PerformanceConfig,
) -> Result<PerformanceReport> {
    let run_dir = results_root.join(timestamp);
    let mut scenarios = IndexMap::new();

    for scenario in &config.scenarios {
        let adapt_dir = run_dir.join(format!("{}_{scenario}", config.candidate_prefix));
        let layered_dir = run_dir.join(format!("{}_{scenario}", config.baseline_prefix));

        if !adapt_dir.is_dir() || !layered_dir.is_dir() {
            continue;
        }

        let adapt = gatling::load_stats(&adapt_dir.join(&config.stats_path))?;
        let layered = gatling::load_stats(&layered_dir.join(&config.stats_path))?;
        let comparison = compare::compare(&adapt, &layered);

        scenarios.insert(
            scenario.clone(),
            ScenarioComparison {
                adapt,
                layered,
                comparison,
            },
        );
    }

    Ok(PerformanceReport {
        timestamp: timestamp.to_string(),
        scenarios,
    })
}
