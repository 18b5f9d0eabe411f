//! Optimization result types

use serde::{Deserialize, Serialize};

use crate::types::{Coordinates, ExcludedBus, Student};

/// Final plan for one bus
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusPlan {
    /// Fleet identifier
    pub bus_id: String,
    /// Assigned students, in assignment order
    pub students: Vec<Student>,
    /// Stop sequence: depot, bus start, then one stop per student
    pub stops: Vec<Coordinates>,
    /// Road polyline of the initial depot -> start leg, for display
    pub geometry: Vec<Coordinates>,
    /// Final cumulative distance in km
    pub total_distance_km: f64,
    /// Fuel cost over the full cumulative distance, initial leg included
    pub fuel_cost: f64,
    /// Whether the initial leg used the straight-line fallback
    pub used_fallback: bool,
}

/// Complete result of one optimization run
///
/// Carries the per-record diagnostics alongside the plans so callers can
/// assert on dropped students and excluded buses instead of scraping logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeSolution {
    /// One plan per usable bus, sorted by bus id
    pub plans: Vec<BusPlan>,
    /// Students left unassigned because every bus was full
    pub dropped: Vec<Student>,
    /// Buses excluded before assignment, with the reason
    pub excluded_buses: Vec<ExcludedBus>,
    /// How many initial legs fell back to straight-line distance
    pub fallback_count: usize,
    /// Wall-clock solve time
    pub solve_time_ms: u64,
}

impl OptimizeSolution {
    /// Total students seated across the fleet
    pub fn total_assigned(&self) -> usize {
        self.plans.iter().map(|p| p.students.len()).sum()
    }

    /// Total fuel cost across the fleet
    pub fn total_fuel_cost(&self) -> f64 {
        self.plans.iter().map(|p| p.fuel_cost).sum()
    }

    /// Look up a plan by bus id
    pub fn plan(&self, bus_id: &str) -> Option<&BusPlan> {
        self.plans.iter().find(|p| p.bus_id == bus_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;

    fn plan(bus_id: &str, students: usize, fuel_cost: f64) -> BusPlan {
        let coords = Coordinates::new(26.78, 75.82);
        BusPlan {
            bus_id: bus_id.to_string(),
            students: (0..students)
                .map(|i| Student::new(format!("s{}", i), coords, "stop"))
                .collect(),
            stops: vec![coords, coords],
            geometry: vec![coords, coords],
            total_distance_km: 12.0,
            fuel_cost,
            used_fallback: false,
        }
    }

    #[test]
    fn test_totals() {
        let solution = OptimizeSolution {
            plans: vec![plan("1", 3, 120.0), plan("2", 2, 80.0)],
            dropped: vec![],
            excluded_buses: vec![],
            fallback_count: 0,
            solve_time_ms: 1,
        };

        assert_eq!(solution.total_assigned(), 5);
        assert!((solution.total_fuel_cost() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_lookup() {
        let solution = OptimizeSolution {
            plans: vec![plan("1", 0, 0.0), plan("2", 0, 0.0)],
            dropped: vec![],
            excluded_buses: vec![],
            fallback_count: 0,
            solve_time_ms: 1,
        };

        assert!(solution.plan("2").is_some());
        assert!(solution.plan("9").is_none());
    }
}
