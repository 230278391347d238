// Models module - exports all model types

mod customer;
mod location;
mod pickup;
mod request;
mod route;
mod solution;

// Re-export model types
pub use self::customer::Customer;
pub use self::location::Location;
pub use self::pickup::PickupPoint;
pub use self::request::{PointRecord, RouteRequest, StartLocation, Vehicle};
pub use self::route::{format_plan_id, Plan, Stop, StopRole, Trip, START_POINT_ID};
pub use self::solution::{PlanOutput, StopOutput, TripOutput, TripSummary};

// Common type aliases for improved code readability
pub type PointId = String;
pub type Distance = f64;
