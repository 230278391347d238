// Input document describing the origin, the points to visit and the fleet

use serde::{Deserialize, Serialize};

use crate::models::{Location, PointId};

/// Route origin as it appears in the input document
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StartLocation {
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lng")]
    pub lng: f64,
}

impl From<StartLocation> for Location {
    fn from(start: StartLocation) -> Self {
        Location::new(start.lat, start.lng)
    }
}

/// A pickup (`isOffloading = false`) or customer (`isOffloading = true`) record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub id: PointId,
    #[serde(default)]
    pub parent_point_id: PointId,
    pub lat: f64,
    pub lng: f64,
    pub is_offloading: bool,
}

impl PointRecord {
    pub fn pickup<S: Into<PointId>>(id: S, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            parent_point_id: PointId::new(),
            lat,
            lng,
            is_offloading: false,
        }
    }

    pub fn customer<S: Into<PointId>, P: Into<PointId>>(id: S, parent: P, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            parent_point_id: parent.into(),
            lat,
            lng,
            is_offloading: true,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lng)
    }

    pub fn is_pickup(&self) -> bool {
        !self.is_offloading
    }
}

/// A fleet roster entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vehicle {
    #[serde(rename = "Type")]
    pub vehicle_type: String,
}

impl Vehicle {
    pub fn new<S: Into<String>>(vehicle_type: S) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
        }
    }
}

/// The complete planning request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_location: StartLocation,
    pub points: Vec<PointRecord>,
    pub vehicles: Vec<Vehicle>,
}

impl RouteRequest {
    pub fn origin(&self) -> Location {
        self.start_location.into()
    }
}
