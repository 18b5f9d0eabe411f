//! Route initialization: one depot -> bus-start leg per usable bus

use std::collections::BTreeMap;

use futures::future;
use tracing::{debug, warn};

use crate::config::OptimizerConfig;
use crate::services::fuel::effective_mileage;
use crate::services::routing::{route_with_fallback, RoutingService};
use crate::types::{Bus, ExcludedBus, ExclusionReason, RouteState};

/// Per-bus route table plus the buses that did not make it in
#[derive(Debug)]
pub struct InitializedRoutes {
    /// Keyed by bus id; BTreeMap iteration order is the deterministic
    /// id-sorted order every later scan relies on
    pub routes: BTreeMap<String, RouteState>,
    pub excluded: Vec<ExcludedBus>,
}

/// Build the initial route for every bus with usable start coordinates
///
/// Routing calls run concurrently, one per bus, and all of them complete
/// before this returns — assignment never sees a half-built table.
/// Malformed and duplicate buses are reported, not silently dropped.
pub async fn initialize_routes(
    routing: &dyn RoutingService,
    config: &OptimizerConfig,
    buses: &[Bus],
) -> InitializedRoutes {
    let mut excluded = Vec::new();
    let mut usable: Vec<&Bus> = Vec::with_capacity(buses.len());

    for bus in buses {
        if !bus.start.is_finite() {
            warn!("Invalid start location for bus {}: ({}, {})", bus.id, bus.start.lat, bus.start.lng);
            excluded.push(ExcludedBus {
                id: bus.id.clone(),
                reason: ExclusionReason::MalformedCoordinates,
            });
        } else if usable.iter().any(|b| b.id == bus.id) {
            warn!("Duplicate bus id {} in input, keeping the first occurrence", bus.id);
            excluded.push(ExcludedBus {
                id: bus.id.clone(),
                reason: ExclusionReason::DuplicateId,
            });
        } else {
            usable.push(bus);
        }
    }

    let legs = future::join_all(
        usable
            .iter()
            .map(|bus| route_with_fallback(routing, config.depot, bus.start)),
    )
    .await;

    let mut routes = BTreeMap::new();
    for (bus, path) in usable.into_iter().zip(legs) {
        debug!(
            "Initial leg for bus {}: {:.2} km{}",
            bus.id,
            path.distance_km,
            if path.fallback { " (fallback)" } else { "" }
        );

        let mileage = effective_mileage(bus.mileage_kmpl, config.default_mileage_kmpl);
        routes.insert(
            bus.id.clone(),
            RouteState::seeded(config.depot, bus.start, path, mileage),
        );
    }

    InitializedRoutes { routes, excluded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::routing::MockRoutingService;
    use crate::types::Coordinates;

    fn depot_config() -> OptimizerConfig {
        OptimizerConfig::with_depot(Coordinates::new(26.78, 75.82))
    }

    fn bus(id: &str, lat: f64, lng: f64) -> Bus {
        Bus::new(id, Coordinates::new(lat, lng), None)
    }

    #[tokio::test]
    async fn test_initializes_one_route_per_bus() {
        let routing = MockRoutingService::new();
        let buses = vec![bus("1", 26.90, 75.75), bus("2", 26.85, 75.70)];

        let init = initialize_routes(&routing, &depot_config(), &buses).await;

        assert_eq!(init.routes.len(), 2);
        assert!(init.excluded.is_empty());

        let route = &init.routes["1"];
        assert_eq!(route.stops.len(), 2);
        assert!(route.total_distance_km > 0.0);
        assert!((route.total_cost - 0.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_excludes_malformed_coordinates() {
        let routing = MockRoutingService::new();
        let buses = vec![bus("1", f64::NAN, 75.75), bus("2", 26.85, 75.70)];

        let init = initialize_routes(&routing, &depot_config(), &buses).await;

        assert_eq!(init.routes.len(), 1);
        assert!(init.routes.contains_key("2"));
        assert_eq!(init.excluded.len(), 1);
        assert_eq!(init.excluded[0].id, "1");
        assert_eq!(init.excluded[0].reason, ExclusionReason::MalformedCoordinates);
    }

    #[tokio::test]
    async fn test_excludes_duplicate_ids_keeping_first() {
        let routing = MockRoutingService::new();
        let buses = vec![bus("1", 26.90, 75.75), bus("1", 26.10, 75.10)];

        let init = initialize_routes(&routing, &depot_config(), &buses).await;

        assert_eq!(init.routes.len(), 1);
        assert_eq!(init.excluded.len(), 1);
        assert_eq!(init.excluded[0].reason, ExclusionReason::DuplicateId);

        // First occurrence wins
        let route = &init.routes["1"];
        assert!((route.stops[1].lat - 26.90).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_mileage_defaulted_when_absent_or_zero() {
        let routing = MockRoutingService::new();
        let buses = vec![
            Bus::new("1", Coordinates::new(26.90, 75.75), None),
            Bus::new("2", Coordinates::new(26.85, 75.70), Some(0.0)),
            Bus::new("3", Coordinates::new(26.80, 75.65), Some(8.0)),
        ];

        let init = initialize_routes(&routing, &depot_config(), &buses).await;

        assert!((init.routes["1"].mileage_kmpl - 10.0).abs() < f64::EPSILON);
        assert!((init.routes["2"].mileage_kmpl - 10.0).abs() < f64::EPSILON);
        assert!((init.routes["3"].mileage_kmpl - 8.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_route_table_iterates_in_id_order() {
        let routing = MockRoutingService::new();
        let buses = vec![bus("7", 26.9, 75.7), bus("23", 26.8, 75.6), bus("11", 26.7, 75.5)];

        let init = initialize_routes(&routing, &depot_config(), &buses).await;

        let ids: Vec<&String> = init.routes.keys().collect();
        assert_eq!(ids, vec!["11", "23", "7"]);
    }
}
