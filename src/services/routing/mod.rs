//! Road-network routing between two points
//!
//! Uses OSRM for production, mock for tests. Any routing failure degrades
//! to a straight two-point path with the Haversine distance.

mod osrm;

pub use osrm::{OsrmClient, OsrmConfig};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::geo::haversine_distance;
use crate::types::Coordinates;

/// A driving path between two points and its real-world length
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedPath {
    /// Path waypoints in (lat, lng) order, start first
    pub coordinates: Vec<Coordinates>,
    /// Driving distance in kilometers
    pub distance_km: f64,
    /// True when this is the straight-line fallback, not a road route
    pub fallback: bool,
}

impl RoutedPath {
    /// Straight two-point path with the great-circle distance
    pub fn straight_line(start: Coordinates, end: Coordinates) -> Self {
        Self {
            coordinates: vec![start, end],
            distance_km: haversine_distance(&start, &end),
            fallback: true,
        }
    }
}

/// Routing service trait for abstraction (OSRM, mock, etc.)
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Get the driving path from `start` to `end`
    async fn route(&self, start: Coordinates, end: Coordinates) -> Result<RoutedPath>;

    /// Get service name for logging
    fn name(&self) -> &str;
}

/// Route between two points, degrading to the straight-line path on any
/// routing failure
///
/// The fallback is silent to the caller (no error propagated); the `warn!`
/// plus the `fallback` flag on the returned path keep it observable. No
/// retry is attempted.
pub async fn route_with_fallback(
    service: &dyn RoutingService,
    start: Coordinates,
    end: Coordinates,
) -> RoutedPath {
    match service.route(start, end).await {
        Ok(path) => path,
        Err(e) => {
            warn!(
                "{} routing failed for ({}, {}) -> ({}, {}): {:#}. Using haversine fallback.",
                service.name(),
                start.lat,
                start.lng,
                end.lat,
                end.lng,
                e
            );
            RoutedPath::straight_line(start, end)
        }
    }
}

/// Mock routing service for tests
///
/// Returns the straight path scaled by a road coefficient, deterministically.
pub struct MockRoutingService {
    /// Coefficient for converting straight-line to road distance
    road_coefficient: f64,
}

impl Default for MockRoutingService {
    fn default() -> Self {
        Self {
            road_coefficient: 1.3,
        }
    }
}

impl MockRoutingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coefficient(road_coefficient: f64) -> Self {
        Self { road_coefficient }
    }
}

#[async_trait]
impl RoutingService for MockRoutingService {
    async fn route(&self, start: Coordinates, end: Coordinates) -> Result<RoutedPath> {
        Ok(RoutedPath {
            coordinates: vec![start, end],
            distance_km: haversine_distance(&start, &end) * self.road_coefficient,
            fallback: false,
        })
    }

    fn name(&self) -> &str {
        "MockRouting"
    }
}
