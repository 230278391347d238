use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use pickup_planner::cli::Args;
use pickup_planner::utils::{loader, logging};
use pickup_planner::{NearestPickupPlanner, TripPlanner};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.debug()).context("failed to set up logging")?;

    let request = loader::load_request(args.input())
        .with_context(|| format!("failed to load route request from {}", args.input().display()))?;

    let planner = NearestPickupPlanner::new(args.planner_config());

    let graph = planner.build_graph(&request).context("failed to build pickup-customer graph")?;
    if !graph.unmatched_customers().is_empty() {
        warn!(
            customers = ?graph.unmatched_customers(),
            "some customers reference unknown pickups and were left out"
        );
    }
    if graph.is_empty() {
        warn!("no pickups in the request, trips will be empty");
    }

    let start_time = std::time::Instant::now();
    let plans = planner
        .calculate_trips(&graph, &request.vehicles)
        .context("failed to calculate trips")?;
    info!(plans = plans.len(), elapsed = ?start_time.elapsed(), "calculated trips");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    loader::write_plans(&mut handle, &plans, args.pretty()).context("failed to write plans")?;
    writeln!(handle)?;

    Ok(())
}
