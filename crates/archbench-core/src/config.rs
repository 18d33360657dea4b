use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::profiles::ProfilesConfig;

/// Top-level configuration from `.archbench.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub profiles: ProfilesConfig,
}

/// Settings for the performance comparison pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<String>,
    #[serde(default = "default_candidate_prefix")]
    pub candidate_prefix: String,
    #[serde(default = "default_baseline_prefix")]
    pub baseline_prefix: String,
    /// Path of the stats file inside each simulation directory.
    #[serde(default = "default_stats_path")]
    pub stats_path: String,
}

fn default_scenarios() -> Vec<String> {
    vec![
        "BaselineSimulation".to_string(),
        "OrderFlowSimulation".to_string(),
        "ConcurrentOrdersSimulation".to_string(),
    ]
}

fn default_candidate_prefix() -> String {
    "adapt".to_string()
}

fn default_baseline_prefix() -> String {
    "layered".to_string()
}

fn default_stats_path() -> String {
    "js/stats.json".to_string()
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            scenarios: default_scenarios(),
            candidate_prefix: default_candidate_prefix(),
            baseline_prefix: default_baseline_prefix(),
            stats_path: default_stats_path(),
        }
    }
}

impl Config {
    /// Load configuration from a `.archbench.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "failed to parse '{}'. Run `archbench init` to create a valid config file",
                path.display()
            )
        })?;
        Ok(config)
    }

    /// Load from `.archbench.toml` in the given directory or any ancestor,
    /// or return defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut current = start.as_path();
        loop {
            let config_path = current.join(".archbench.toml");
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!(
                            "Warning: failed to load config from '{}': {e:#}. Using defaults.",
                            config_path.display()
                        );
                        Self::default()
                    }
                };
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Self::default()
    }

    /// Generate default TOML content for `archbench init`.
    pub fn default_toml() -> String {
        r#"# archbench - Architecture Benchmark Analysis Configuration
# See https://github.com/adapt-research/archbench for documentation

[performance]
# Load-test scenarios to compare, in report order
scenarios = ["BaselineSimulation", "OrderFlowSimulation", "ConcurrentOrdersSimulation"]
# Results-directory prefixes for each architecture
candidate_prefix = "adapt"
baseline_prefix = "layered"
# Stats file inside each simulation directory
stats_path = "js/stats.json"

# The built-in service profile tables can be overridden here.
# Omitted sections fall back to the built-in case-study data.
# [profiles.layered]
# architecture = "layered"
# coupling = "synchronous_tight"
# shared_database = true
# interface_style = "REST_synchronous"
# [[profiles.layered.services]]
# name = "OrderService"
# dependencies = ["UserRepository", "ProductRepository", "PaymentService"]
# [[profiles.layered.interfaces]]
# name = "OrderController"
# operations = 4
# weight = 1.0
# [profiles.layered.cohesion]
# cohesive_operations = 8
# total_operations = 15
# cross_domain_access = true
# bounded_contexts = false
"#
        .to_string()
    }
}
