//! Fuel cost model

/// Fuel cost for driving `distance_km` on a bus doing `mileage_kmpl`
///
/// Callers must pass a positive mileage; use [`effective_mileage`] to
/// resolve caller-supplied values first.
pub fn fuel_cost(distance_km: f64, price_per_litre: f64, mileage_kmpl: f64) -> f64 {
    let litres = distance_km / mileage_kmpl;
    litres * price_per_litre
}

/// Resolve a bus's reported mileage against the configured default
///
/// Absent, non-finite and non-positive values all fall back to the default,
/// so downstream cost math never divides by zero.
pub fn effective_mileage(reported: Option<f64>, default_kmpl: f64) -> f64 {
    match reported {
        Some(m) if m.is_finite() && m > 0.0 => m,
        _ => default_kmpl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_cost_basic() {
        // 100 km at 10 km/l and 100/l -> 10 litres -> 1000
        let cost = fuel_cost(100.0, 100.0, 10.0);
        assert!((cost - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuel_cost_zero_distance() {
        let cost = fuel_cost(0.0, 100.0, 10.0);
        assert!((cost - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fuel_cost_proportional_to_distance() {
        let short = fuel_cost(10.0, 100.0, 12.0);
        let long = fuel_cost(20.0, 100.0, 12.0);
        assert!((long - 2.0 * short).abs() < 1e-9);
    }

    #[test]
    fn test_effective_mileage_uses_reported() {
        assert!((effective_mileage(Some(8.5), 10.0) - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_mileage_defaults_when_absent() {
        assert!((effective_mileage(None, 10.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_mileage_defaults_when_zero_or_negative() {
        assert!((effective_mileage(Some(0.0), 10.0) - 10.0).abs() < f64::EPSILON);
        assert!((effective_mileage(Some(-3.0), 10.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_mileage_defaults_when_nan() {
        assert!((effective_mileage(Some(f64::NAN), 10.0) - 10.0).abs() < f64::EPSILON);
    }
}
