pub mod compare;
pub mod config;
pub mod discovery;
pub mod dora;
pub mod gatling;
pub mod maintainability;
pub mod profiles;
pub mod types;

pub use config::Config;
pub use dora::DoraMetrics;
pub use maintainability::{ArchitectureMetrics, MaintainabilityReport, MetricsComparison};
pub use profiles::{ArchitectureProfile, ProfilesConfig};
pub use types::*;
