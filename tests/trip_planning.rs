// Integration tests for the full graph -> plans pipeline
use pickup_planner::models::{PlanOutput, PointRecord, StartLocation, START_POINT_ID};
use pickup_planner::utils::loader;
use pickup_planner::{
    Location, NearestPickupPlanner, PlannerConfig, PlanningError, RouteRequest, StopRole, TripPlanner, Vehicle,
};
use serde_json::Value;
use std::error::Error;

fn request(points: Vec<PointRecord>, vehicles: &[&str]) -> RouteRequest {
    RouteRequest {
        start_location: StartLocation { lat: 0.0, lng: 0.0 },
        points,
        vehicles: vehicles.iter().map(|v| Vehicle::new(*v)).collect(),
    }
}

fn scenario_points() -> Vec<PointRecord> {
    vec![
        PointRecord::pickup("P1", 0.0, 1.0),
        PointRecord::pickup("P2", 0.0, 2.0),
        PointRecord::customer("C1", "P1", 0.0, 1.1),
    ]
}

#[test]
fn test_end_to_end_scenario() -> Result<(), Box<dyn Error>> {
    let planner = NearestPickupPlanner::default();
    let request = request(scenario_points(), &["Van"]);

    let graph = planner.build_graph(&request)?;
    let order: Vec<_> = graph.pickups_in_order().into_iter().map(|p| p.id.clone()).collect();
    assert_eq!(order, vec!["P1", "P2"]);

    let plans = planner.calculate_trips(&graph, &request.vehicles)?;
    assert_eq!(plans.len(), 1);

    let plan = &plans[0];
    assert_eq!(plan.plan_id(), "01");
    assert_eq!(plan.trips.len(), 1);

    let trip = &plan.trips[0];
    assert_eq!(trip.trip_id(), "T1");
    assert_eq!(trip.vehicle_type, "Van");

    let stops: Vec<_> = trip.stops.iter().map(|s| (s.role, s.point_id.as_str())).collect();
    assert_eq!(
        stops,
        vec![
            (StopRole::Start, START_POINT_ID),
            (StopRole::Pickup, "P1"),
            (StopRole::Customer, "C1"),
            (StopRole::Pickup, "P2"),
        ]
    );
    assert_eq!(trip.stops[0].location, Location::new(0.0, 1.0));

    let p1 = Location::new(0.0, 1.0);
    let p2 = Location::new(0.0, 2.0);
    let c1 = Location::new(0.0, 1.1);
    let expected_km = p1.distance_to(&p1) + c1.distance_to(&p1) + p2.distance_to(&p1);
    assert!((trip.distance - expected_km).abs() < 1e-9);
    assert!((trip.distance_in_meters() - expected_km * 1000.0).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_end_to_end_json_output() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "startLocation": { "Lat": 0.0, "Lng": 0.0 },
        "points": [
            { "id": "C1", "parentPointId": "P1", "lat": 0.0, "lng": 1.1, "isOffloading": true },
            { "id": "P2", "parentPointId": "", "lat": 0.0, "lng": 2.0, "isOffloading": false },
            { "id": "P1", "parentPointId": "", "lat": 0.0, "lng": 1.0, "isOffloading": false }
        ],
        "vehicles": [ { "Type": "Van" } ]
    }"#;

    let request = loader::parse_request(json)?;
    let plans = NearestPickupPlanner::default().plan(&request)?;

    let mut buffer = Vec::new();
    loader::write_plans(&mut buffer, &plans, true)?;
    let value: Value = serde_json::from_slice(&buffer)?;

    assert_eq!(value[0]["planId"], "01");
    let trip = &value[0]["trips"][0];
    assert_eq!(trip["tripId"], "T1");
    assert_eq!(trip["VehicleType"], "Van");
    assert!(trip["summary"]["distanceInMeter"].as_f64().unwrap_or(-1.0) > 0.0);

    let ids: Vec<_> = trip["trip"]
        .as_array()
        .map(|stops| stops.iter().map(|s| s["pointId"].as_str().unwrap_or("")).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec!["Start", "P1", "C1", "P2"]);
    assert_eq!(trip["trip"][0]["parentPointId"], "");
    assert_eq!(trip["trip"][2]["parentPointId"], "P1");

    // The output reads back into the same shape, distances bit for bit
    let parsed: Vec<PlanOutput> = serde_json::from_slice(&buffer)?;
    assert_eq!(parsed, loader::to_output(&plans));
    assert_eq!(
        value[0]["trips"][0]["summary"]["distanceInMeter"].as_f64(),
        Some(plans[0].trips[0].distance_in_meters())
    );

    Ok(())
}

#[test]
fn test_unmatched_customer_absent_from_trips() -> Result<(), Box<dyn Error>> {
    let mut points = scenario_points();
    points.push(PointRecord::customer("GHOST", "P404", 0.0, 1.05));

    let planner = NearestPickupPlanner::default();
    let request = request(points, &["Van", "Truck"]);
    let graph = planner.build_graph(&request)?;
    assert_eq!(graph.unmatched_customers(), &["GHOST".to_string()]);

    let plans = planner.calculate_trips(&graph, &request.vehicles)?;
    for plan in &plans {
        for trip in &plan.trips {
            assert!(trip.stops.iter().all(|stop| stop.point_id != "GHOST"));
        }
    }

    Ok(())
}

#[test]
fn test_orphan_with_out_of_range_coordinates_is_ignored() -> Result<(), Box<dyn Error>> {
    let points = vec![
        PointRecord::pickup("P1", 0.0, 1.0),
        PointRecord::customer("ORPHAN", "NOPE", 95.0, 0.0),
    ];

    let planner = NearestPickupPlanner::default();
    let request = request(points, &["Van"]);
    let graph = planner.build_graph(&request)?;
    assert_eq!(graph.unmatched_customers(), &["ORPHAN".to_string()]);

    let plans = planner.plan(&request)?;
    assert_eq!(plans.len(), 1);
    let ids: Vec<_> = plans[0].trips[0].stops.iter().map(|s| s.point_id.as_str()).collect();
    assert_eq!(ids, vec![START_POINT_ID, "P1"]);

    Ok(())
}

#[test]
fn test_zero_pickup_scenario() -> Result<(), Box<dyn Error>> {
    let planner = NearestPickupPlanner::default();

    let only_customers = request(vec![PointRecord::customer("C1", "P1", 0.0, 1.1)], &["Van"]);
    let empty = request(Vec::new(), &["Van"]);

    for request in [only_customers, empty] {
        let plans = planner.plan(&request)?;
        assert_eq!(plans.len(), 1);

        let trip = &plans[0].trips[0];
        assert!(trip.stops.is_empty());
        assert_eq!(trip.distance, 0.0);
        assert_eq!(trip.distance_in_meters(), 0.0);
    }

    Ok(())
}

#[test]
fn test_plan_count_is_factorial() -> Result<(), Box<dyn Error>> {
    let planner = NearestPickupPlanner::default();

    for (vehicles, expected) in [(0, 1), (1, 1), (2, 2), (3, 6), (4, 24)] {
        let fleet: Vec<&str> = vec!["Van"; vehicles];
        let plans = planner.plan(&request(scenario_points(), &fleet))?;
        assert_eq!(plans.len(), expected, "fleet of {}", vehicles);
        assert!(plans.iter().all(|plan| plan.trips.len() == vehicles));
    }

    Ok(())
}

#[test]
fn test_plan_ids_past_nine() -> Result<(), Box<dyn Error>> {
    let plans = NearestPickupPlanner::default().plan(&request(scenario_points(), &["A", "B", "C", "D"]))?;

    let ids: Vec<_> = plans.iter().map(|plan| plan.plan_id()).collect();
    assert_eq!(&ids[..3], &["01", "02", "03"]);
    assert_eq!(ids[8], "09");
    assert_eq!(ids[9], "10");
    assert_eq!(ids[23], "24");

    Ok(())
}

#[test]
fn test_plans_are_independent_and_identical() -> Result<(), Box<dyn Error>> {
    let request = request(scenario_points(), &["Van", "Truck", "Bike"]);

    for config in [PlannerConfig::default(), PlannerConfig::new(true, None)] {
        let plans = NearestPickupPlanner::new(config).plan(&request)?;
        assert_eq!(plans.len(), 6);

        // Draining queues in one plan must not leak into the next: every plan
        // sees the full graph and, as things stand, produces the same trips.
        for plan in &plans {
            assert_eq!(plan.trips, plans[0].trips);
            assert_eq!(plan.trips[0].stops.len(), 4);
            assert!(plan.trips[1].stops.is_empty());
            assert!(plan.trips[2].stops.is_empty());
        }

        let vehicle_types: Vec<_> = plans[5].trips.iter().map(|t| t.vehicle_type.as_str()).collect();
        assert_eq!(vehicle_types, vec!["Van", "Truck", "Bike"]);
    }

    Ok(())
}

#[test]
fn test_malformed_input_is_reported() {
    let result = loader::parse_request(r#"{ "startLocation": { "Lat": "x", "Lng": 0.0 }, "points": [], "vehicles": [] }"#);
    match result {
        Err(err) => assert!(err.is_input_malformation()),
        Ok(_) => panic!("malformed input was accepted"),
    }

    let planner = NearestPickupPlanner::default();
    let duplicate = request(
        vec![PointRecord::pickup("P1", 0.0, 1.0), PointRecord::pickup("P1", 0.0, 1.5)],
        &["Van"],
    );
    assert!(matches!(planner.plan(&duplicate), Err(PlanningError::DuplicatePickup(_))));
}

#[test]
fn test_sample_input_file() -> Result<(), Box<dyn Error>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_input.json");
    let request = loader::load_request(path)?;
    let planner = NearestPickupPlanner::default();

    let graph = planner.build_graph(&request)?;
    assert_eq!(graph.pickup_count(), 3);
    assert_eq!(graph.customer_count(), 3);
    assert_eq!(graph.unmatched_customers(), &["C4".to_string()]);

    let plans = planner.calculate_trips(&graph, &request.vehicles)?;
    assert_eq!(plans.len(), 6);
    println!("Sample plan distance: {:.1} m", plans[0].trips[0].distance_in_meters());

    Ok(())
}
