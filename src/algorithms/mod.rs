pub mod graph_builder;
pub mod nearest_pickup;
pub mod plan_enumerator;
pub mod trip_assembler;

// Common algorithm traits
use crate::algorithms::graph_builder::PickupCustomerGraph;
use crate::error::PlanningResult;
use crate::models::{Plan, RouteRequest, Vehicle};

/// Trait for pickup and delivery trip planners
pub trait TripPlanner {
    /// Build the pickup-customer graph for a request
    fn build_graph(&self, request: &RouteRequest) -> PlanningResult<PickupCustomerGraph>;

    /// Calculate every plan for the fleet from an already built graph
    fn calculate_trips(&self, graph: &PickupCustomerGraph, vehicles: &[Vehicle]) -> PlanningResult<Vec<Plan>>;

    /// Run both phases in sequence
    fn plan(&self, request: &RouteRequest) -> PlanningResult<Vec<Plan>> {
        let graph = self.build_graph(request)?;
        self.calculate_trips(&graph, &request.vehicles)
    }
}
