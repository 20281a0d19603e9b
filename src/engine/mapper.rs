//! Node-index to waypoint-identifier mapping.

use crate::models::Waypoint;

/// Translates solver node indices back to caller-supplied identifiers.
///
/// Node `k` maps to `waypoints[k - 1]` (node 0 is the start point and never
/// appears in a solver order). The solver's ordering is preserved exactly,
/// and every input waypoint appears exactly once in a well-formed order.
///
/// # Panics
///
/// Panics if an index is 0 or out of range — that is a solver contract
/// violation, not a runtime condition to recover from; a well-formed
/// solver order never contains one.
///
/// # Examples
///
/// ```
/// use delivery_routing::engine::map_order;
/// use delivery_routing::models::{Coordinate, Waypoint};
///
/// let origin = Coordinate::new(0.0, 0.0).unwrap();
/// let waypoints = vec![
///     Waypoint::new("a", origin),
///     Waypoint::new("b", origin),
///     Waypoint::new("c", origin),
/// ];
/// assert_eq!(map_order(&[3, 1, 2], &waypoints), vec!["c", "a", "b"]);
/// ```
pub fn map_order<Id: Clone>(order: &[usize], waypoints: &[Waypoint<Id>]) -> Vec<Id> {
    order
        .iter()
        .map(|&node| {
            debug_assert!(node >= 1 && node <= waypoints.len(), "node {node} out of range");
            waypoints[node - 1].id().clone()
        })
        .collect()
}
