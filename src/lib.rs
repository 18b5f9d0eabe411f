//! Busplan - bus route construction and student seat allocation engine
//!
//! Builds one route per bus out of a fixed depot, then assigns students to
//! buses one at a time, always picking the bus whose total fuel cost grows
//! the least. Road distances come from an OSRM server when one is
//! reachable, with a great-circle fallback otherwise.
//!
//! The crate is the computational core only: input parsing, CSV emission
//! and HTTP serving are the embedding application's concern. It hands the
//! engine clean bus/student tables and receives an [`OptimizeSolution`]
//! with per-bus plans and diagnostics back.

pub mod config;
pub mod defaults;
pub mod services;
pub mod types;

pub use config::{Config, OptimizerConfig};
pub use services::optimizer::{OptimizeError, OptimizeSolution, RouteOptimizer};
pub use services::routing::{MockRoutingService, OsrmClient, OsrmConfig, RoutingService};
pub use types::{Bus, Coordinates, ExcludedBus, RouteState, Student};
