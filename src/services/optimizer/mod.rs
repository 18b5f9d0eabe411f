//! Route optimization engine
//!
//! Ties route initialization and greedy assignment together: one routed
//! depot -> start leg per bus, then a first-come-first-served pass over
//! the student roster.

mod assign;
mod init;
mod solution;

pub use assign::{assign_students, AssignmentOutcome};
pub use init::{initialize_routes, InitializedRoutes};
pub use solution::{BusPlan, OptimizeSolution};

use std::time::Instant;

use tracing::info;

use crate::config::OptimizerConfig;
use crate::services::fuel::fuel_cost;
use crate::services::routing::RoutingService;
use crate::types::{Bus, Student};

/// Optimization failure
///
/// Per-record problems (bad coordinates, full buses, routing outages) are
/// recovered and reported inside the solution; only a run that cannot
/// produce anything at all fails.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("no valid bus routes could be created")]
    NoValidRoutes,
}

/// Seat-allocation engine for one fleet and one depot
pub struct RouteOptimizer {
    config: OptimizerConfig,
    routing: Box<dyn RoutingService>,
}

impl RouteOptimizer {
    pub fn new(config: OptimizerConfig, routing: Box<dyn RoutingService>) -> Self {
        Self { config, routing }
    }

    /// Run the full pipeline: initialize routes, assign students, report
    ///
    /// The student roster is consumed in the order given; callers that
    /// want a different priority must reorder it first.
    pub async fn optimize(
        &self,
        buses: &[Bus],
        students: &[Student],
    ) -> Result<OptimizeSolution, OptimizeError> {
        let started_at = Instant::now();

        info!(
            "Optimizing {} buses / {} students via {}",
            buses.len(),
            students.len(),
            self.routing.name()
        );

        let init = init::initialize_routes(&*self.routing, &self.config, buses).await;
        if init.routes.is_empty() {
            return Err(OptimizeError::NoValidRoutes);
        }

        let mut routes = init.routes;
        let outcome = assign::assign_students(
            students,
            &mut routes,
            self.config.bus_capacity,
            self.config.fuel_price_per_litre,
        );

        let fallback_count = routes.values().filter(|r| r.used_fallback).count();
        let mut assignments = outcome.assignments;

        let plans = routes
            .into_iter()
            .map(|(bus_id, route)| {
                let students = assignments.remove(&bus_id).unwrap_or_default();
                // Reported cost covers the whole cumulative distance,
                // initial leg included
                let cost = fuel_cost(
                    route.total_distance_km,
                    self.config.fuel_price_per_litre,
                    route.mileage_kmpl,
                );
                BusPlan {
                    bus_id,
                    students,
                    stops: route.stops,
                    geometry: route.geometry,
                    total_distance_km: route.total_distance_km,
                    fuel_cost: cost,
                    used_fallback: route.used_fallback,
                }
            })
            .collect::<Vec<_>>();

        let solution = OptimizeSolution {
            plans,
            dropped: outcome.dropped,
            excluded_buses: init.excluded,
            fallback_count,
            solve_time_ms: started_at.elapsed().as_millis() as u64,
        };

        info!(
            "Optimization done in {} ms: {} assigned, {} dropped, {} buses excluded",
            solution.solve_time_ms,
            solution.total_assigned(),
            solution.dropped.len(),
            solution.excluded_buses.len()
        );

        Ok(solution)
    }
}
