//! Business logic services

pub mod fuel;
pub mod geo;
pub mod optimizer;
pub mod routing;
