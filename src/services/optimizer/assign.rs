//! Greedy student-to-bus assignment
//!
//! Single pass over the roster in input order. Each student goes to the
//! under-capacity bus whose total fuel cost grows the least when the
//! student's nearest existing stop is charged as the marginal leg. Order
//! matters: later students are priced against routes already grown by
//! earlier insertions.
//!
//! # Complexity
//!
//! O(n·m·k) for n students, m buses and k current stops per bus.

use std::collections::BTreeMap;

use tracing::warn;

use crate::services::fuel::fuel_cost;
use crate::services::geo::haversine_distance;
use crate::types::{Coordinates, RouteState, Student};

/// Result of one assignment pass
#[derive(Debug)]
pub struct AssignmentOutcome {
    /// Assigned students per bus id, in assignment order
    pub assignments: BTreeMap<String, Vec<Student>>,
    /// Students no bus had a seat for, in roster order
    pub dropped: Vec<Student>,
}

/// Nearest stop of a route to a candidate point
struct NearestStop {
    index: usize,
    distance_km: f64,
}

/// Scan the full stop sequence for the stop closest to `point`
fn nearest_stop(point: &Coordinates, stops: &[Coordinates]) -> Option<NearestStop> {
    let mut best: Option<NearestStop> = None;
    for (index, stop) in stops.iter().enumerate() {
        let distance_km = haversine_distance(point, stop);
        let closer = match &best {
            None => true,
            Some(b) => distance_km < b.distance_km,
        };
        if closer {
            best = Some(NearestStop { index, distance_km });
        }
    }
    best
}

/// Winning bus for one student, with the values to commit on selection
struct Candidate {
    bus_id: String,
    insert_after: usize,
    added_distance_km: f64,
    prospective_cost: f64,
}

/// Assign every student in roster order, mutating the route table in place
///
/// Bus evaluation follows the map's id-sorted iteration order; a strictly
/// cheaper prospective cost is required to displace the current best, so
/// ties resolve to the earlier id deterministically.
pub fn assign_students(
    students: &[Student],
    routes: &mut BTreeMap<String, RouteState>,
    capacity: u32,
    fuel_price_per_litre: f64,
) -> AssignmentOutcome {
    let mut assignments: BTreeMap<String, Vec<Student>> = routes
        .keys()
        .map(|id| (id.clone(), Vec::new()))
        .collect();
    let mut dropped = Vec::new();

    for student in students {
        let mut best: Option<Candidate> = None;

        for (bus_id, route) in routes.iter() {
            if route.assigned >= capacity {
                continue;
            }
            let Some(nearest) = nearest_stop(&student.coordinates, &route.stops) else {
                continue;
            };

            let marginal_cost = fuel_cost(nearest.distance_km, fuel_price_per_litre, route.mileage_kmpl);
            let prospective_cost = route.total_cost + marginal_cost;

            let cheaper = match &best {
                None => true,
                Some(b) => prospective_cost < b.prospective_cost,
            };
            if cheaper {
                best = Some(Candidate {
                    bus_id: bus_id.clone(),
                    insert_after: nearest.index,
                    added_distance_km: nearest.distance_km,
                    prospective_cost,
                });
            }
        }

        let Some(candidate) = best else {
            warn!("Could not assign student {}, all buses are at capacity", student.name);
            dropped.push(student.clone());
            continue;
        };

        if let Some(route) = routes.get_mut(&candidate.bus_id) {
            // New stop goes immediately after the nearest existing one;
            // the same scan priced the marginal leg
            route.stops.insert(candidate.insert_after + 1, student.coordinates);
            route.total_distance_km += candidate.added_distance_km;
            route.total_cost = candidate.prospective_cost;
            route.assigned += 1;
        }
        if let Some(list) = assignments.get_mut(&candidate.bus_id) {
            list.push(student.clone());
        }
    }

    AssignmentOutcome { assignments, dropped }
}
