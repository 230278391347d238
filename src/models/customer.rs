// Customer model representing drop-off locations

use crate::models::{Distance, Location, PickupPoint, PointId};

/// Represents a drop-off point attached to exactly one pickup
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique identifier of the customer
    pub id: PointId,

    /// Geographic location of the drop-off
    pub location: Location,

    /// Distance in kilometers from the owning pickup
    pub distance_from_pickup: Distance,
}

impl Customer {
    /// Creates a customer measured against the pickup it belongs to
    pub fn new<S: Into<PointId>>(id: S, location: Location, pickup: &PickupPoint) -> Self {
        Self {
            id: id.into(),
            location,
            distance_from_pickup: location.distance_to(&pickup.location),
        }
    }
}
