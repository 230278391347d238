// Route models for representing assembled trips and plans

use crate::models::{Customer, Distance, Location, PickupPoint, PointId};

/// Synthetic point id used for the first stop of every non-empty trip
pub const START_POINT_ID: &str = "Start";

/// Role a stop plays within a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopRole {
    Start,
    Pickup,
    Customer,
}

/// A single visited point in a trip
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub point_id: PointId,
    pub location: Location,
    pub parent_point_id: PointId,
    pub role: StopRole,
}

impl Stop {
    /// Start stop placed at the given pickup's coordinates
    pub fn start(pickup: &PickupPoint) -> Self {
        Self {
            point_id: START_POINT_ID.to_string(),
            location: pickup.location,
            parent_point_id: PointId::new(),
            role: StopRole::Start,
        }
    }

    pub fn pickup(pickup: &PickupPoint) -> Self {
        Self {
            point_id: pickup.id.clone(),
            location: pickup.location,
            parent_point_id: pickup.parent_id.clone(),
            role: StopRole::Pickup,
        }
    }

    /// Customer stop, parented to the pickup that serves it
    pub fn customer(customer: &Customer, pickup: &PickupPoint) -> Self {
        Self {
            point_id: customer.id.clone(),
            location: customer.location,
            parent_point_id: pickup.id.clone(),
            role: StopRole::Customer,
        }
    }
}

/// Ordered stops driven by one vehicle within a plan
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position of the vehicle in the fleet roster
    pub vehicle_index: usize,

    /// Vehicle type label from the roster
    pub vehicle_type: String,

    /// Stops in visiting order
    pub stops: Vec<Stop>,

    /// Accumulated distance in kilometers
    pub distance: Distance,
}

impl Trip {
    /// Creates an empty trip for a vehicle
    pub fn new<S: Into<String>>(vehicle_index: usize, vehicle_type: S) -> Self {
        Self {
            vehicle_index,
            vehicle_type: vehicle_type.into(),
            stops: Vec::new(),
            distance: 0.0,
        }
    }

    /// One-based trip id, e.g. "T1"
    pub fn trip_id(&self) -> String {
        format!("T{}", self.vehicle_index + 1)
    }

    pub fn distance_in_meters(&self) -> f64 {
        self.distance * 1000.0
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops with the given role, in visiting order
    pub fn stops_with_role(&self, role: StopRole) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(move |stop| stop.role == role)
    }
}

/// One full assignment of the fleet to trips
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Zero-based plan index
    pub index: usize,

    /// One trip per vehicle, in roster order
    pub trips: Vec<Trip>,
}

impl Plan {
    pub fn new(index: usize, trips: Vec<Trip>) -> Self {
        Self { index, trips }
    }

    /// One-based plan id, zero padded to two digits
    pub fn plan_id(&self) -> String {
        format_plan_id(self.index)
    }

    /// Sum of all trip distances in kilometers
    pub fn total_distance(&self) -> Distance {
        self.trips.iter().map(|trip| trip.distance).sum()
    }
}

/// Formats a zero-based plan index as a one-based id with at least two digits
pub fn format_plan_id(index: usize) -> String {
    format!("{:02}", index + 1)
}
