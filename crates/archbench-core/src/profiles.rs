use serde::{Deserialize, Serialize};

use crate::types::CouplingStyle;

/// One service and the services/resources it depends on directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProfile {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ServiceProfile {
    fn new(name: &str, dependencies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// One exposed interface: its operation count and weight. Weights below
/// 1.0 model partially asynchronous interfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceProfile {
    pub name: String,
    pub operations: u32,
    pub weight: f64,
}

impl InterfaceProfile {
    fn new(name: &str, operations: u32, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            operations,
            weight,
        }
    }
}

/// Cohesion counts and data-ownership flags for one architecture.
/// `cross_domain_access` and `bounded_contexts` are mutually exclusive in
/// the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohesionProfile {
    pub cohesive_operations: u32,
    pub total_operations: u32,
    pub cross_domain_access: bool,
    pub bounded_contexts: bool,
}

/// The full hand-authored description of one architecture variant.
///
/// This is illustrative case-study data, kept as explicit configuration
/// rather than derived from any live codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureProfile {
    pub architecture: String,
    pub coupling: CouplingStyle,
    pub shared_database: bool,
    /// Dependency name that counts as the loose-coupling link, e.g. the
    /// event bus every service publishes to.
    #[serde(default)]
    pub message_bus: Option<String>,
    pub interface_style: String,
    pub services: Vec<ServiceProfile>,
    pub interfaces: Vec<InterfaceProfile>,
    pub cohesion: CohesionProfile,
}

impl ArchitectureProfile {
    /// The synchronous layered monolith: five services sharing a database,
    /// REST-only controllers, cross-domain repository access.
    pub fn layered() -> Self {
        Self {
            architecture: "layered".to_string(),
            coupling: CouplingStyle::SynchronousTight,
            shared_database: true,
            message_bus: None,
            interface_style: "REST_synchronous".to_string(),
            services: vec![
                ServiceProfile::new(
                    "OrderService",
                    &["UserRepository", "ProductRepository", "PaymentService"],
                ),
                ServiceProfile::new("PaymentService", &["OrderRepository"]),
                ServiceProfile::new(
                    "BillingService",
                    &["OrderRepository", "PaymentRepository", "UserRepository"],
                ),
                ServiceProfile::new("InventoryService", &[]),
                ServiceProfile::new(
                    "NotificationService",
                    &["OrderRepository", "UserRepository"],
                ),
            ],
            interfaces: vec![
                InterfaceProfile::new("OrderController", 4, 1.0),
                InterfaceProfile::new("PaymentController", 3, 1.0),
                InterfaceProfile::new("BillingController", 3, 1.0),
                InterfaceProfile::new("InventoryController", 4, 1.0),
                InterfaceProfile::new("NotificationController", 1, 1.0),
            ],
            cohesion: CohesionProfile {
                cohesive_operations: 8,
                total_operations: 15,
                cross_domain_access: true,
                bounded_contexts: false,
            },
        }
    }

    /// The event-driven ADAPT variant: six services communicating over
    /// Kafka, mixed REST/event interfaces, one bounded context per service.
    pub fn adapt() -> Self {
        Self {
            architecture: "adapt".to_string(),
            coupling: CouplingStyle::AsynchronousLoose,
            shared_database: false,
            message_bus: Some("kafka".to_string()),
            interface_style: "REST_plus_Events".to_string(),
            services: vec![
                ServiceProfile::new("order-service", &["kafka"]),
                ServiceProfile::new("inventory-service", &["kafka"]),
                ServiceProfile::new("payment-service", &["kafka"]),
                ServiceProfile::new("billing-service", &["kafka"]),
                ServiceProfile::new("notification-service", &["kafka"]),
                ServiceProfile::new("user-service", &[]),
            ],
            interfaces: vec![
                // REST + events
                InterfaceProfile::new("order-service", 4, 0.8),
                // mostly events
                InterfaceProfile::new("inventory-service", 3, 0.6),
                InterfaceProfile::new("payment-service", 3, 0.6),
                InterfaceProfile::new("billing-service", 3, 0.6),
                InterfaceProfile::new("notification-service", 1, 0.5),
                // REST only
                InterfaceProfile::new("user-service", 3, 1.0),
                // routing
                InterfaceProfile::new("api-gateway", 6, 0.3),
            ],
            cohesion: CohesionProfile {
                cohesive_operations: 17,
                total_operations: 17,
                cross_domain_access: false,
                bounded_contexts: true,
            },
        }
    }
}

/// The pair of architecture profiles under comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(default = "ArchitectureProfile::layered")]
    pub layered: ArchitectureProfile,
    #[serde(default = "ArchitectureProfile::adapt")]
    pub adapt: ArchitectureProfile,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            layered: ArchitectureProfile::layered(),
            adapt: ArchitectureProfile::adapt(),
        }
    }
}
