use crate::algorithms::graph_builder::PickupCustomerGraph;
use crate::algorithms::plan_enumerator::PlanEnumerator;
use crate::algorithms::TripPlanner;
use crate::config::PlannerConfig;
use crate::error::PlanningResult;
use crate::models::{Plan, RouteRequest, Vehicle};

/// Greedy planner: nearest pickup first, each pickup's customers nearest-first,
/// replayed once per vehicle ordering
#[derive(Debug, Clone, Default)]
pub struct NearestPickupPlanner {
    config: PlannerConfig,
}

impl NearestPickupPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl TripPlanner for NearestPickupPlanner {
    fn build_graph(&self, request: &RouteRequest) -> PlanningResult<PickupCustomerGraph> {
        PickupCustomerGraph::build(request.origin(), &request.points)
    }

    fn calculate_trips(&self, graph: &PickupCustomerGraph, vehicles: &[Vehicle]) -> PlanningResult<Vec<Plan>> {
        PlanEnumerator::new(graph, vehicles, &self.config).enumerate()
    }
}
