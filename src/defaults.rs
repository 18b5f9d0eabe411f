use crate::types::Coordinates;

/// Seats per bus
pub const DEFAULT_BUS_CAPACITY: u32 = 42;

/// Fuel price per litre
pub const DEFAULT_FUEL_PRICE_PER_LITRE: f64 = 100.0;

/// Mileage substituted when a bus reports none (km per litre)
pub const DEFAULT_MILEAGE_KMPL: f64 = 10.0;

/// Public OSRM instance used when no server is configured
pub const DEFAULT_OSRM_URL: &str = "http://router.project-osrm.org";

/// Routing request timeout in seconds
pub const DEFAULT_OSRM_TIMEOUT_SECONDS: u64 = 10;

/// Campus depot all routes start from
pub fn default_depot() -> Coordinates {
    Coordinates {
        lat: 26.78218919094841,
        lng: 75.82251239614644,
    }
}
