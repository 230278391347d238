// Location model representing geographic coordinates

use crate::models::Distance;
use crate::utils::distance::haversine_distance;

/// Represents a location with (latitude, longitude) coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> Distance {
        haversine_distance(self, other)
    }

    /// Checks that both components are finite and inside the valid degree ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}
