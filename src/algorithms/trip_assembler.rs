use tracing::{debug, warn};

use crate::algorithms::graph_builder::{PickupCustomerGraph, PlanQueues};
use crate::models::{Location, Stop, Trip, Vehicle};

/// Assembles one vehicle's trip by draining the plan's queues.
///
/// The trip starts at the nearest remaining pickup. Every pickup is then
/// visited nearest-first, each followed by all of its customers nearest-first.
/// Pickup legs are measured back to the start point, customer legs to the
/// previous stop. A vehicle whose turn finds no pickups gets an empty trip.
pub fn assemble_trip(
    graph: &PickupCustomerGraph,
    queues: &mut PlanQueues,
    vehicle_index: usize,
    vehicle: &Vehicle,
) -> Trip {
    let mut trip = Trip::new(vehicle_index, vehicle.vehicle_type.as_str());

    let Some(start) = queues
        .pickups
        .peek()
        .and_then(|(&index, _)| graph.pickup(index))
    else {
        return trip;
    };
    let start_location = start.location;
    trip.stops.push(Stop::start(start));

    while let Some((pickup_index, _)) = queues.pickups.pop() {
        let Some(pickup) = graph.pickup(pickup_index) else {
            warn!(?pickup_index, "pickup queue holds a non-pickup node, skipping it");
            continue;
        };

        trip.stops.push(Stop::pickup(pickup));
        trip.distance += pickup.location.distance_to(&start_location);

        let mut previous: Location = pickup.location;
        while let Some(customer_index) = queues.pop_customer(pickup_index) {
            let Some(customer) = graph.customer(customer_index) else {
                warn!(?customer_index, pickup = %pickup.id, "customer queue holds a non-customer node, skipping it");
                continue;
            };

            trip.stops.push(Stop::customer(customer, pickup));
            trip.distance += customer.location.distance_to(&previous);
            previous = customer.location;
        }
    }

    debug!(
        trip = %trip.trip_id(),
        stops = trip.stops.len(),
        distance_km = trip.distance,
        "assembled trip"
    );

    trip
}
