// Distance calculation utilities

use crate::models::{Distance, Location};

/// Mean Earth radius in kilometers used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle distance in kilometers between two points
/// using the haversine formula
pub fn haversine_distance(p1: &Location, p2: &Location) -> Distance {
    // Absolute deltas keep the result bit-for-bit symmetric in its arguments
    let d_lat = degree_rad((p2.lat - p1.lat).abs());
    let d_lng = degree_rad((p2.lng - p1.lng).abs());

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);
    // Rounding can push `a` marginally above 1 for antipodal points
    let a = a.clamp(0., 1.);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}
