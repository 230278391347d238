// Serializable view of the planning result

use serde::{Deserialize, Serialize};

use crate::models::{Plan, Stop, Trip};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOutput {
    pub point_id: String,
    pub lat: f64,
    pub lng: f64,
    pub parent_point_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub distance_in_meter: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripOutput {
    #[serde(rename = "tripId")]
    pub trip_id: String,
    #[serde(rename = "VehicleType")]
    pub vehicle_type: String,
    pub summary: TripSummary,
    pub trip: Vec<StopOutput>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlanOutput {
    #[serde(rename = "planId")]
    pub plan_id: String,
    pub trips: Vec<TripOutput>,
}

impl From<&Stop> for StopOutput {
    fn from(stop: &Stop) -> Self {
        Self {
            point_id: stop.point_id.clone(),
            lat: stop.location.lat,
            lng: stop.location.lng,
            parent_point_id: stop.parent_point_id.clone(),
        }
    }
}

impl From<&Trip> for TripOutput {
    fn from(trip: &Trip) -> Self {
        Self {
            trip_id: trip.trip_id(),
            vehicle_type: trip.vehicle_type.clone(),
            summary: TripSummary {
                distance_in_meter: trip.distance_in_meters(),
            },
            trip: trip.stops.iter().map(StopOutput::from).collect(),
        }
    }
}

impl From<&Plan> for PlanOutput {
    fn from(plan: &Plan) -> Self {
        Self {
            plan_id: plan.plan_id(),
            trips: plan.trips.iter().map(TripOutput::from).collect(),
        }
    }
}
