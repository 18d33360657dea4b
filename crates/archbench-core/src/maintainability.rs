use serde::{Deserialize, Serialize};

use crate::profiles::{ArchitectureProfile, ProfilesConfig};
use crate::types::{round2, round4, CouplingStyle, MetricsError};

/// Structural Coupling (SC): ratio of actual to possible inter-service
/// dependencies. Lower is looser, considered better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralCoupling {
    pub architecture: String,
    pub structural_coupling: f64,
    pub dependencies_count: usize,
    pub possible_dependencies: usize,
    pub coupling_type: CouplingStyle,
    pub shared_database: bool,
}

/// Weighted Service Interface Count (WSIC): weighted sum of per-interface
/// operation counts. Lower means a lighter synchronous coupling surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceCount {
    pub architecture: String,
    pub wsic: f64,
    pub total_interfaces: usize,
    pub avg_methods_per_interface: f64,
    pub interface_type: String,
}

/// Service Interface Data Cohesion (SIDC): ratio of cohesive to total
/// operations. Higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCohesion {
    pub architecture: String,
    pub sidc: f64,
    pub cohesive_operations: u32,
    pub total_operations: u32,
    pub cross_domain_access: bool,
    pub bounded_contexts: bool,
}

/// The metric triple for one architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureMetrics {
    pub structural_coupling: StructuralCoupling,
    pub wsic: InterfaceCount,
    pub sidc: DataCohesion,
}

/// Percentage deltas between the two architectures' metric triples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    pub sc_improvement: f64,
    pub wsic_reduction: f64,
    pub sidc_improvement: f64,
}

/// The on-disk maintainability report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityReport {
    pub layered: ArchitectureMetrics,
    pub adapt: ArchitectureMetrics,
    pub comparison: MetricsComparison,
}

/// Compute structural coupling for one architecture profile.
///
/// Tightly-coupled profiles count every listed dependency; loosely-coupled
/// profiles count only the message-bus link per service, since services
/// depend on events rather than on each other.
pub fn structural_coupling(profile: &ArchitectureProfile) -> StructuralCoupling {
    let total_services = profile.services.len();
    let total_possible = total_services * total_services.saturating_sub(1);

    let actual = match profile.coupling {
        CouplingStyle::SynchronousTight => profile
            .services
            .iter()
            .map(|s| s.dependencies.len())
            .sum(),
        CouplingStyle::AsynchronousLoose => {
            let bus = profile.message_bus.as_deref().unwrap_or_default();
            profile
                .services
                .iter()
                .filter(|s| s.dependencies.iter().any(|d| d == bus))
                .count()
        }
    };

    let sc = if total_possible > 0 {
        round4(actual as f64 / total_possible as f64)
    } else {
        0.0
    };

    StructuralCoupling {
        architecture: profile.architecture.clone(),
        structural_coupling: sc,
        dependencies_count: actual,
        possible_dependencies: total_possible,
        coupling_type: profile.coupling,
        shared_database: profile.shared_database,
    }
}

/// Compute the weighted service interface count for one profile.
pub fn wsic(profile: &ArchitectureProfile) -> InterfaceCount {
    let total: f64 = profile
        .interfaces
        .iter()
        .map(|i| f64::from(i.operations) * i.weight)
        .sum();

    let count = profile.interfaces.len();
    let average = if count > 0 {
        round2(total / count as f64)
    } else {
        0.0
    };

    InterfaceCount {
        architecture: profile.architecture.clone(),
        wsic: round2(total),
        total_interfaces: count,
        avg_methods_per_interface: average,
        interface_type: profile.interface_style.clone(),
    }
}

/// Compute service interface data cohesion for one profile.
pub fn sidc(profile: &ArchitectureProfile) -> DataCohesion {
    let cohesion = &profile.cohesion;
    let ratio = if cohesion.total_operations > 0 {
        round4(f64::from(cohesion.cohesive_operations) / f64::from(cohesion.total_operations))
    } else {
        0.0
    };

    DataCohesion {
        architecture: profile.architecture.clone(),
        sidc: ratio,
        cohesive_operations: cohesion.cohesive_operations,
        total_operations: cohesion.total_operations,
        cross_domain_access: cohesion.cross_domain_access,
        bounded_contexts: cohesion.bounded_contexts,
    }
}

/// Compute the full metric triple for one architecture.
pub fn compute(profile: &ArchitectureProfile) -> ArchitectureMetrics {
    ArchitectureMetrics {
        structural_coupling: structural_coupling(profile),
        wsic: wsic(profile),
        sidc: sidc(profile),
    }
}

fn improvement(baseline: f64, delta: f64, metric: &'static str) -> Result<f64, MetricsError> {
    if baseline == 0.0 {
        return Err(MetricsError::ZeroBaseline { metric });
    }
    Ok(round2(delta / baseline * 100.0))
}

/// Cross-architecture comparison over the already-rounded stored values.
///
/// Unlike the performance comparator this one fails on a zero layered
/// baseline instead of degrading; callers must guarantee nonzero baselines.
pub fn compare_all(
    layered: &ArchitectureMetrics,
    adapt: &ArchitectureMetrics,
) -> Result<MetricsComparison, MetricsError> {
    let layered_sc = layered.structural_coupling.structural_coupling;
    let adapt_sc = adapt.structural_coupling.structural_coupling;

    Ok(MetricsComparison {
        sc_improvement: improvement(layered_sc, layered_sc - adapt_sc, "sc_improvement")?,
        wsic_reduction: improvement(
            layered.wsic.wsic,
            layered.wsic.wsic - adapt.wsic.wsic,
            "wsic_reduction",
        )?,
        // Opposite sign convention: ADAPT cohesion is expected higher.
        sidc_improvement: improvement(
            layered.sidc.sidc,
            adapt.sidc.sidc - layered.sidc.sidc,
            "sidc_improvement",
        )?,
    })
}

/// Compute both architectures' metrics and their comparison.
pub fn report(profiles: &ProfilesConfig) -> Result<MaintainabilityReport, MetricsError> {
    let layered = compute(&profiles.layered);
    let adapt = compute(&profiles.adapt);
    let comparison = compare_all(&layered, &adapt)?;

    Ok(MaintainabilityReport {
        layered,
        adapt,
        comparison,
    })
}
