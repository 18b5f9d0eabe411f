//! Student roster types

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A student to be seated on a bus
///
/// The caller has already filtered the roster down to rows with numeric
/// coordinates; the order of the roster is the order students compete for
/// seats, so it must be preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Display name, not required to be unique
    pub name: String,
    /// Home location
    pub coordinates: Coordinates,
    /// Named pickup point, carried through for reporting only
    pub pickup_point: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        coordinates: Coordinates,
        pickup_point: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            pickup_point: pickup_point.into(),
        }
    }
}
