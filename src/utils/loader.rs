// Reading planning requests and writing plan sets as JSON

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::{PlanningError, PlanningResult};
use crate::models::{Plan, PlanOutput, RouteRequest};

/// Load a planning request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> PlanningResult<RouteRequest> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading route request");

    let json = fs::read_to_string(path).map_err(|source| PlanningError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let request = parse_request(&json)?;
    info!(
        points = request.points.len(),
        vehicles = request.vehicles.len(),
        "loaded route request"
    );

    Ok(request)
}

/// Parse a planning request from a JSON string
pub fn parse_request(json: &str) -> PlanningResult<RouteRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Serializable view of a plan set
pub fn to_output(plans: &[Plan]) -> Vec<PlanOutput> {
    plans.iter().map(PlanOutput::from).collect()
}

/// Write plans as a JSON array
pub fn write_plans<W: Write>(writer: W, plans: &[Plan], pretty: bool) -> io::Result<()> {
    let output = to_output(plans);
    if pretty {
        serde_json::to_writer_pretty(writer, &output)?;
    } else {
        serde_json::to_writer(writer, &output)?;
    }
    Ok(())
}
