use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::{debug, info, warn};

use crate::error::{PlanningError, PlanningResult};
use crate::models::{Customer, Distance, Location, PickupPoint, PointId, PointRecord};
use crate::utils::nearest_queue::NearestQueue;

/// Entity stored in the pickup-customer arena
#[derive(Debug, Clone, PartialEq)]
pub enum GraphNode {
    Pickup(PickupPoint),
    Customer(Customer),
}

/// Queue of pickups ordered by distance from the origin
pub type PickupQueue = NearestQueue<NodeIndex>;

/// Queue of one pickup's customers ordered by distance from that pickup
pub type CustomerQueue = NearestQueue<NodeIndex>;

/// Bipartite pickup -> customer graph built once per request.
///
/// Entities live in the graph arena and never change after insertion; the
/// queues only reference them by `NodeIndex`.
#[derive(Debug, Clone)]
pub struct PickupCustomerGraph {
    /// Arena of pickups and customers, edges run pickup -> customer
    graph: DiGraph<GraphNode, Distance>,

    /// Route origin used to order pickups
    origin: Location,

    /// All pickups, nearest to the origin first
    pickups: PickupQueue,

    /// Customers of every pickup, nearest to the pickup first
    customers: HashMap<NodeIndex, CustomerQueue>,

    /// Pickup id -> arena index
    pickup_ids: HashMap<PointId, NodeIndex>,

    /// Customer ids whose parent pickup does not exist
    unmatched_customers: Vec<PointId>,
}

/// Per-plan working copy of the graph queues, drained during trip assembly
#[derive(Debug, Clone)]
pub struct PlanQueues {
    pub pickups: PickupQueue,
    pub customers: HashMap<NodeIndex, CustomerQueue>,
}

impl PlanQueues {
    /// Removes and returns the nearest remaining customer of a pickup
    pub fn pop_customer(&mut self, pickup: NodeIndex) -> Option<NodeIndex> {
        self.customers
            .get_mut(&pickup)
            .and_then(|queue| queue.pop())
            .map(|(customer, _)| customer)
    }
}

impl PickupCustomerGraph {
    /// Builds the graph from raw point records.
    ///
    /// Pickups are ordered by distance from `origin`; each customer is linked
    /// to the pickup named by its parent id and ordered by distance from it.
    /// Customers whose parent id matches no pickup are dropped before their
    /// coordinates are checked.
    pub fn build(origin: Location, points: &[PointRecord]) -> PlanningResult<Self> {
        if !origin.is_valid() {
            return Err(PlanningError::InvalidCoordinate {
                id: "startLocation".to_string(),
                lat: origin.lat,
                lng: origin.lng,
            });
        }

        let mut graph = DiGraph::new();
        let mut pickups = PickupQueue::new();
        let mut customers = HashMap::new();
        let mut pickup_ids: HashMap<PointId, NodeIndex> = HashMap::new();

        // Pickups first, since customers may precede their pickup in the input
        for record in points.iter().filter(|record| record.is_pickup()) {
            let location = validated_location(record)?;
            if pickup_ids.contains_key(&record.id) {
                return Err(PlanningError::DuplicatePickup(record.id.clone()));
            }

            let pickup = PickupPoint::new(
                record.id.as_str(),
                record.parent_point_id.as_str(),
                location,
                Some(&origin),
            );
            let distance = pickup.distance_from_origin;
            let index = graph.add_node(GraphNode::Pickup(pickup));

            pickups.push(index, distance);
            customers.insert(index, CustomerQueue::new());
            pickup_ids.insert(record.id.clone(), index);
        }

        let mut unmatched_customers = Vec::new();
        for record in points.iter().filter(|record| !record.is_pickup()) {
            let Some(&pickup_index) = pickup_ids.get(record.parent_point_id.as_str()) else {
                warn!(
                    customer = %record.id,
                    parent = %record.parent_point_id,
                    "customer references an unknown pickup, dropping it"
                );
                unmatched_customers.push(record.id.clone());
                continue;
            };
            let location = validated_location(record)?;

            let Some(GraphNode::Pickup(pickup)) = graph.node_weight(pickup_index) else {
                warn!(customer = %record.id, ?pickup_index, "pickup index does not hold a pickup, skipping customer");
                continue;
            };
            let customer = Customer::new(record.id.as_str(), location, pickup);
            let distance = customer.distance_from_pickup;
            let index = graph.add_node(GraphNode::Customer(customer));
            graph.add_edge(pickup_index, index, distance);

            if let Some(queue) = customers.get_mut(&pickup_index) {
                queue.push(index, distance);
            }
        }

        info!(
            pickups = pickups.len(),
            customers = graph.edge_count(),
            dropped = unmatched_customers.len(),
            "built pickup-customer graph"
        );

        Ok(Self {
            graph,
            origin,
            pickups,
            customers,
            pickup_ids,
            unmatched_customers,
        })
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    /// Returns the pickup stored at `index`, if it is a pickup node
    pub fn pickup(&self, index: NodeIndex) -> Option<&PickupPoint> {
        match self.graph.node_weight(index)? {
            GraphNode::Pickup(pickup) => Some(pickup),
            GraphNode::Customer(_) => None,
        }
    }

    /// Returns the customer stored at `index`, if it is a customer node
    pub fn customer(&self, index: NodeIndex) -> Option<&Customer> {
        match self.graph.node_weight(index)? {
            GraphNode::Customer(customer) => Some(customer),
            GraphNode::Pickup(_) => None,
        }
    }

    /// Looks up a pickup node by its id
    pub fn find_pickup(&self, id: &str) -> Option<NodeIndex> {
        self.pickup_ids.get(id).copied()
    }

    /// The pickup a customer node is attached to
    pub fn owner_of(&self, customer: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(customer, Direction::Incoming)
            .next()
    }

    pub fn pickup_queue(&self) -> &PickupQueue {
        &self.pickups
    }

    pub fn customer_queue(&self, pickup: NodeIndex) -> Option<&CustomerQueue> {
        self.customers.get(&pickup)
    }

    /// Pickups nearest to the origin first
    pub fn pickups_in_order(&self) -> Vec<&PickupPoint> {
        self.pickups
            .drain_ordered()
            .into_iter()
            .filter_map(|index| self.pickup(index))
            .collect()
    }

    /// Customers of a pickup, nearest to the pickup first
    pub fn customers_in_order(&self, pickup: NodeIndex) -> Vec<&Customer> {
        self.customer_queue(pickup)
            .map(|queue| {
                queue
                    .drain_ordered()
                    .into_iter()
                    .filter_map(|index| self.customer(index))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn pickup_count(&self) -> usize {
        self.pickups.len()
    }

    pub fn customer_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn unmatched_customers(&self) -> &[PointId] {
        &self.unmatched_customers
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }

    /// Deep copies the queues so a plan can drain them without touching the graph
    pub fn fresh_queues(&self) -> PlanQueues {
        debug!(pickups = self.pickups.len(), "copying queues for a new plan");
        PlanQueues {
            pickups: self.pickups.clone(),
            customers: self.customers.clone(),
        }
    }
}

fn validated_location(record: &PointRecord) -> PlanningResult<Location> {
    let location = record.location();
    if location.is_valid() {
        Ok(location)
    } else {
        Err(PlanningError::InvalidCoordinate {
            id: record.id.clone(),
            lat: record.lat,
            lng: record.lng,
        })
    }
}
