// Random planning instances for benchmarks and tests

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{PointRecord, RouteRequest, StartLocation, Vehicle};

/// Size and spread of a generated instance
#[derive(Debug, Clone)]
pub struct InstanceShape {
    pub pickups: usize,
    pub customers_per_pickup: usize,
    /// Customers whose parent id matches no pickup
    pub orphan_customers: usize,
    pub vehicles: usize,
    /// Half-width in degrees of the box points are scattered in
    pub spread: f64,
    pub origin: (f64, f64),
}

impl Default for InstanceShape {
    fn default() -> Self {
        Self {
            pickups: 5,
            customers_per_pickup: 3,
            orphan_customers: 0,
            vehicles: 3,
            spread: 0.5,
            origin: (52.37, 4.89),
        }
    }
}

/// Generate a request with randomly placed pickups and customers.
/// Records are shuffled so customers may precede their pickup.
pub fn generate_request<R: Rng>(rng: &mut R, shape: &InstanceShape) -> RouteRequest {
    let (origin_lat, origin_lng) = shape.origin;

    let mut points = Vec::new();
    for p in 0..shape.pickups {
        let pickup_id = format!("P{}", p + 1);
        let (lat, lng) = random_point(rng, shape);
        points.push(PointRecord::pickup(pickup_id.as_str(), lat, lng));

        for c in 0..shape.customers_per_pickup {
            let (lat, lng) = random_point(rng, shape);
            points.push(PointRecord::customer(
                format!("C{}-{}", p + 1, c + 1),
                pickup_id.as_str(),
                lat,
                lng,
            ));
        }
    }

    for o in 0..shape.orphan_customers {
        let (lat, lng) = random_point(rng, shape);
        points.push(PointRecord::customer(format!("X{}", o + 1), "unknown", lat, lng));
    }

    points.shuffle(rng);

    RouteRequest {
        start_location: StartLocation {
            lat: origin_lat,
            lng: origin_lng,
        },
        points,
        vehicles: (0..shape.vehicles)
            .map(|v| Vehicle::new(format!("Vehicle{}", v + 1)))
            .collect(),
    }
}

fn random_point<R: Rng>(rng: &mut R, shape: &InstanceShape) -> (f64, f64) {
    let (origin_lat, origin_lng) = shape.origin;
    let lat = origin_lat + rng.gen_range(-shape.spread..=shape.spread);
    let lng = origin_lng + rng.gen_range(-shape.spread..=shape.spread);
    (lat.clamp(-90.0, 90.0), lng.clamp(-180.0, 180.0))
}
