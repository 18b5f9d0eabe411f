//! OSRM routing engine client
//!
//! OSRM route API documentation:
//! https://project-osrm.org/docs/v5.24.0/api/#route-service

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{RoutedPath, RoutingService};
use crate::defaults;
use crate::types::Coordinates;

/// OSRM client configuration
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL of the OSRM server (e.g. "http://router.project-osrm.org")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_OSRM_URL.to_string(),
            timeout_seconds: defaults::DEFAULT_OSRM_TIMEOUT_SECONDS,
        }
    }
}

impl OsrmConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// OSRM routing client
pub struct OsrmClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build the driving-route URL (OSRM expects lon,lat pairs)
    fn route_url(&self, start: &Coordinates, end: &Coordinates) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.config.base_url, start.lng, start.lat, end.lng, end.lat
        )
    }
}

#[async_trait]
impl RoutingService for OsrmClient {
    async fn route(&self, start: Coordinates, end: Coordinates) -> Result<RoutedPath> {
        let url = self.route_url(&start, &end);

        debug!("Requesting driving route from OSRM: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send route request to OSRM")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OSRM returned error {}: {}", status, body);
        }

        let route_response: RouteResponse = response
            .json()
            .await
            .context("Failed to parse OSRM response")?;

        let route = route_response
            .routes
            .into_iter()
            .next()
            .context("OSRM returned no routes")?;

        let path = decode_route(route);

        debug!(
            "Received route with {} points, {:.2} km",
            path.coordinates.len(),
            path.distance_km
        );

        Ok(path)
    }

    fn name(&self) -> &str {
        "OSRM"
    }
}

/// Convert an OSRM route to our format: GeoJSON [lon, lat] pairs become
/// (lat, lng) coordinates, metres become kilometres
fn decode_route(route: OsrmRoute) -> RoutedPath {
    let coordinates = route
        .geometry
        .coordinates
        .iter()
        .map(|pair| Coordinates {
            lat: pair[1],
            lng: pair[0],
        })
        .collect();

    RoutedPath {
        coordinates,
        distance_km: route.distance / 1000.0,
        fallback: false,
    }
}

// OSRM API types

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: Geometry,
    /// Route length in meters
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON LineString: [lon, lat] pairs
    coordinates: Vec<[f64; 2]>,
}
