// Public modules
pub mod algorithms;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::graph_builder::PickupCustomerGraph;
pub use algorithms::nearest_pickup::NearestPickupPlanner;
pub use algorithms::TripPlanner;
pub use config::PlannerConfig;
pub use error::{PlanningError, PlanningResult};
pub use models::{Location, Plan, RouteRequest, Stop, StopRole, Trip, Vehicle};
