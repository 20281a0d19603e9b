//! Optimized route type.

use serde::Serialize;

use super::Priority;

/// The visiting order produced by the engine.
///
/// Stops are the caller's waypoint identifiers in optimized order; the start
/// point is implicit and never appears in `stops`. The total cost is in the
/// unit of the priority the route was computed under (metres for
/// [`Priority::Distance`], seconds for [`Priority::Time`], haversine-metre
/// proxy under estimator fallback). A route is immutable once created.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Priority, Route};
///
/// let route = Route::new(vec![3u32, 1, 2], 4200, Priority::Distance);
/// assert_eq!(route.stops(), &[3, 1, 2]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.total_cost(), 4200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<Id> {
    stops: Vec<Id>,
    total_cost: u64,
    priority: Priority,
}

impl<Id> Route<Id> {
    /// Creates a route from an ordered stop list and its total cost.
    pub fn new(stops: Vec<Id>, total_cost: u64, priority: Priority) -> Self {
        Self {
            stops,
            total_cost,
            priority,
        }
    }

    /// The waypoint identifiers in visiting order (start point excluded).
    pub fn stops(&self) -> &[Id] {
        &self.stops
    }

    /// Consumes the route, returning the ordered identifiers.
    pub fn into_stops(self) -> Vec<Id> {
        self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total cost along the path, in the priority's unit.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// The priority this route was optimized for.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}
