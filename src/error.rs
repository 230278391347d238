// Error type shared by the planning phases

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures that abort graph building or trip calculation.
///
/// Customers referencing an unknown pickup and empty inputs are not errors;
/// they produce a smaller (possibly empty) graph instead.
#[derive(Debug)]
pub enum PlanningError {
    /// The input document could not be read
    Io { path: PathBuf, source: io::Error },

    /// The input document has missing or mistyped fields
    Parse(serde_json::Error),

    /// A point or the origin has non-finite or out-of-range coordinates
    InvalidCoordinate { id: String, lat: f64, lng: f64 },

    /// Two pickup records share the same id
    DuplicatePickup(String),

    /// The number of plans for this fleet does not fit in `usize`
    FleetTooLarge(usize),

    /// The number of plans exceeds the configured limit
    PlanLimitExceeded { plans: usize, limit: usize },
}

/// A type alias for results of the planning phases.
pub type PlanningResult<T> = Result<T, PlanningError>;

impl PlanningError {
    /// Whether the error stems from a malformed input document
    pub fn is_input_malformation(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Parse(_) | Self::InvalidCoordinate { .. } | Self::DuplicatePickup(_)
        )
    }
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Parse(err) => write!(f, "malformed input document: {err}"),
            Self::InvalidCoordinate { id, lat, lng } => {
                write!(f, "point '{id}' has invalid coordinates lat={lat}, lng={lng}")
            }
            Self::DuplicatePickup(id) => write!(f, "pickup id '{id}' is used more than once"),
            Self::FleetTooLarge(vehicles) => {
                write!(f, "{vehicles} vehicles produce more plans than can be enumerated")
            }
            Self::PlanLimitExceeded { plans, limit } => {
                write!(f, "{plans} plans exceed the configured limit of {limit}")
            }
        }
    }
}

impl std::error::Error for PlanningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PlanningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
