//! Cost priority selector.

use serde::{Deserialize, Serialize};

/// Which travel cost the route should minimize.
///
/// With an external travel-cost provider, `Distance` reads the provider's
/// distance in metres and `Time` reads its duration in seconds. When the
/// provider is absent or a cell falls back to the straight-line estimator,
/// **both** modes use haversine metres as a proxy: no metres-to-seconds
/// conversion is invented, so under fallback only the relative ordering of
/// costs is meaningful, not their unit.
///
/// Defaults to `Time` (fastest route), matching the common courier case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Minimize total travel distance (metres).
    Distance,
    /// Minimize total travel time (seconds).
    #[default]
    Time,
}
