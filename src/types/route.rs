//! Route state types

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::services::routing::RoutedPath;

/// Mutable state of one bus's route during an optimization run
///
/// Owned exclusively by the assignment loop; updated one student at a time.
/// `stops` always holds the depot, the bus start, and one coordinate per
/// assigned student, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    /// Stop sequence the nearest-neighbor scans run over
    pub stops: Vec<Coordinates>,
    /// Road-network polyline of the initial depot -> start leg, kept for
    /// reporting; `[depot, start]` when the routing service fell back
    pub geometry: Vec<Coordinates>,
    /// Cumulative real-world distance in km
    pub total_distance_km: f64,
    /// Cumulative fuel cost charged so far (the initial leg is charged
    /// only in the final report, not here)
    pub total_cost: f64,
    /// Students assigned so far
    pub assigned: u32,
    /// Effective mileage for this bus, already defaulted to a positive value
    pub mileage_kmpl: f64,
    /// Whether the initial leg used the straight-line fallback
    pub used_fallback: bool,
}

impl RouteState {
    /// Seed the state from the routed initial leg
    pub fn seeded(
        depot: Coordinates,
        start: Coordinates,
        path: RoutedPath,
        mileage_kmpl: f64,
    ) -> Self {
        Self {
            stops: vec![depot, start],
            geometry: path.coordinates,
            total_distance_km: path.distance_km,
            total_cost: 0.0,
            assigned: 0,
            mileage_kmpl,
            used_fallback: path.fallback,
        }
    }
}
