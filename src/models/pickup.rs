// Pickup model representing locations where goods are collected

use crate::models::{Distance, Location, PointId};

/// Represents a pickup location serving one or more customers
#[derive(Debug, Clone, PartialEq)]
pub struct PickupPoint {
    /// Unique identifier of the pickup
    pub id: PointId,

    /// Parent reference carried over from the input record
    pub parent_id: PointId,

    /// Geographic location of the pickup
    pub location: Location,

    /// Distance in kilometers from the route origin, fixed at construction
    pub distance_from_origin: Distance,
}

impl PickupPoint {
    /// Creates a new pickup and measures its distance from `origin`.
    /// Without an origin the pickup is treated as the origin itself.
    pub fn new<S: Into<PointId>, P: Into<PointId>>(
        id: S,
        parent_id: P,
        location: Location,
        origin: Option<&Location>,
    ) -> Self {
        let distance_from_origin = origin.map_or(0.0, |origin| location.distance_to(origin));

        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            location,
            distance_from_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_distance_from_origin() {
        let origin = Location::new(0.0, 0.0);
        let pickup = PickupPoint::new("P1", "", Location::new(0.0, 1.0), Some(&origin));

        assert_eq!(pickup.id, "P1");
        assert!(pickup.parent_id.is_empty());
        assert_eq!(
            pickup.distance_from_origin,
            Location::new(0.0, 1.0).distance_to(&origin)
        );
    }

    #[test]
    fn test_origin_placeholder_has_zero_distance() {
        let pickup = PickupPoint::new("origin", "", Location::new(10.0, 10.0), None);
        assert_eq!(pickup.distance_from_origin, 0.0);
    }
}
