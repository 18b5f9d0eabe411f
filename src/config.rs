//! Configuration management

use anyhow::{Context, Result};

use crate::defaults;
use crate::services::routing::OsrmConfig;
use crate::types::Coordinates;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OSRM routing server
    pub osrm: OsrmConfig,

    /// Optimization parameters
    pub optimizer: OptimizerConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Every knob has a default, so this only fails on unparseable values.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let osrm_url = std::env::var("OSRM_URL")
            .unwrap_or_else(|_| defaults::DEFAULT_OSRM_URL.to_string());

        let osrm_timeout = parse_env("OSRM_TIMEOUT_SECONDS", defaults::DEFAULT_OSRM_TIMEOUT_SECONDS)?;

        let depot = Coordinates {
            lat: parse_env("DEPOT_LAT", defaults::default_depot().lat)?,
            lng: parse_env("DEPOT_LON", defaults::default_depot().lng)?,
        };

        let optimizer = OptimizerConfig {
            depot,
            bus_capacity: parse_env("BUS_CAPACITY", defaults::DEFAULT_BUS_CAPACITY)?,
            fuel_price_per_litre: parse_env(
                "FUEL_PRICE_PER_LITRE",
                defaults::DEFAULT_FUEL_PRICE_PER_LITRE,
            )?,
            default_mileage_kmpl: parse_env(
                "DEFAULT_MILEAGE_KMPL",
                defaults::DEFAULT_MILEAGE_KMPL,
            )?,
        };

        Ok(Self {
            osrm: OsrmConfig {
                base_url: osrm_url,
                timeout_seconds: osrm_timeout,
            },
            optimizer,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a valid number (got '{}')", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Parameters for a single optimization run
///
/// Passed into the engine by value so several runs with different depots or
/// fleets can execute side by side without shared state.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Depot every route departs from
    pub depot: Coordinates,
    /// Seats per bus
    pub bus_capacity: u32,
    /// Fuel price per litre
    pub fuel_price_per_litre: f64,
    /// Mileage substituted when a bus reports none or a non-positive value
    pub default_mileage_kmpl: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            depot: defaults::default_depot(),
            bus_capacity: defaults::DEFAULT_BUS_CAPACITY,
            fuel_price_per_litre: defaults::DEFAULT_FUEL_PRICE_PER_LITRE,
            default_mileage_kmpl: defaults::DEFAULT_MILEAGE_KMPL,
        }
    }
}

impl OptimizerConfig {
    /// Config with a custom depot, everything else defaulted
    pub fn with_depot(depot: Coordinates) -> Self {
        Self {
            depot,
            ..Default::default()
        }
    }
}
