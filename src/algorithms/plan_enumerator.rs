use rayon::prelude::*;
use tracing::{debug, info};

use crate::algorithms::graph_builder::PickupCustomerGraph;
use crate::algorithms::trip_assembler::assemble_trip;
use crate::config::PlannerConfig;
use crate::error::{PlanningError, PlanningResult};
use crate::models::{Plan, Vehicle};

/// Number of vehicle orderings for a fleet, `vehicles!`.
/// Returns `None` when the result does not fit in `usize`.
pub fn plan_count(vehicles: usize) -> Option<usize> {
    (2..=vehicles).try_fold(1usize, |acc, n| acc.checked_mul(n))
}

/// Drives one trip-assembly pass per vehicle ordering.
pub struct PlanEnumerator<'a> {
    graph: &'a PickupCustomerGraph,
    vehicles: &'a [Vehicle],
    config: &'a PlannerConfig,
}

impl<'a> PlanEnumerator<'a> {
    pub fn new(graph: &'a PickupCustomerGraph, vehicles: &'a [Vehicle], config: &'a PlannerConfig) -> Self {
        Self {
            graph,
            vehicles,
            config,
        }
    }

    /// Total number of plans this fleet produces, checked against the configured limit
    pub fn total_plans(&self) -> PlanningResult<usize> {
        let plans = plan_count(self.vehicles.len()).ok_or(PlanningError::FleetTooLarge(self.vehicles.len()))?;

        match self.config.max_plans {
            Some(limit) if plans > limit => Err(PlanningError::PlanLimitExceeded { plans, limit }),
            _ => Ok(plans),
        }
    }

    /// Produces every plan, ordered by plan index
    pub fn enumerate(&self) -> PlanningResult<Vec<Plan>> {
        let plans = self.total_plans()?;
        info!(
            vehicles = self.vehicles.len(),
            plans,
            parallel = self.config.parallel,
            "enumerating plans"
        );

        let result: Vec<Plan> = if self.config.parallel {
            (0..plans).into_par_iter().map(|index| self.assemble_plan(index)).collect()
        } else {
            (0..plans).map(|index| self.assemble_plan(index)).collect()
        };

        Ok(result)
    }

    /// Assembles a single plan against its own copy of the queues.
    // TODO: derive a distinct vehicle-to-pickup assignment from `index`; every
    // plan currently replays the same greedy draining order.
    pub fn assemble_plan(&self, index: usize) -> Plan {
        let mut queues = self.graph.fresh_queues();

        let trips = self
            .vehicles
            .iter()
            .enumerate()
            .map(|(vehicle_index, vehicle)| assemble_trip(self.graph, &mut queues, vehicle_index, vehicle))
            .collect();

        let plan = Plan::new(index, trips);
        debug!(plan = %plan.plan_id(), distance_km = plan.total_distance(), "assembled plan");
        plan
    }
}
