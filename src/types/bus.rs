//! Bus fleet types

use serde::{Deserialize, Serialize};

/// Coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers (NaN/infinity mark a record
    /// that failed numeric parsing upstream)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A bus in the fleet, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    /// Fleet identifier, unique across the input set
    pub id: String,
    /// Where the bus is parked before the run
    pub start: Coordinates,
    /// Kilometres per litre; the configured default applies when absent
    pub mileage_kmpl: Option<f64>,
}

impl Bus {
    pub fn new(id: impl Into<String>, start: Coordinates, mileage_kmpl: Option<f64>) -> Self {
        Self {
            id: id.into(),
            start,
            mileage_kmpl,
        }
    }
}

/// Why a bus was left out of the optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Start coordinates are not finite numbers
    MalformedCoordinates,
    /// Same id already seen earlier in the input
    DuplicateId,
}

/// A bus excluded from the optimization, reported back to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedBus {
    pub id: String,
    pub reason: ExclusionReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_finite() {
        let coords = Coordinates::new(26.78, 75.82);
        assert!(coords.is_finite());
    }

    #[test]
    fn test_coordinates_nan_not_finite() {
        let coords = Coordinates::new(f64::NAN, 75.82);
        assert!(!coords.is_finite());

        let coords = Coordinates::new(26.78, f64::INFINITY);
        assert!(!coords.is_finite());
    }

    #[test]
    fn test_bus_without_mileage() {
        let bus = Bus::new("B-7", Coordinates::new(26.9, 75.8), None);
        assert_eq!(bus.id, "B-7");
        assert!(bus.mileage_kmpl.is_none());
    }

    #[test]
    fn test_coordinates_serde_camel_case() {
        let coords = Coordinates::new(26.78, 75.82);
        let json = serde_json::to_value(coords).unwrap();
        assert!((json["lat"].as_f64().unwrap() - 26.78).abs() < 1e-9);
        assert!((json["lng"].as_f64().unwrap() - 75.82).abs() < 1e-9);
    }
}
