//! Cost matrix assembly with provider fallback.
//!
//! Builds the n×n travel-cost matrix over `[start] + waypoints`. When a
//! travel-cost provider is supplied, it is queried once for the whole matrix
//! (a single batched round trip — never n² individual calls) with a small
//! bounded retry; its per-element results are preferred over the haversine
//! estimator. Fallback is **per cell**: an element the provider could not
//! resolve (or reported as negative/non-finite) gets the straight-line
//! estimate, while the rest of the provider data is kept. A failed call or a
//! wrong-shaped response discards the provider result entirely, since its
//! indices can no longer be trusted.

use log::warn;

use crate::distance::haversine;
use crate::models::{Coordinate, Priority, Waypoint};
use crate::provider::{MatrixCell, TravelCostProvider, TravelMatrix};

use super::CostMatrix;

/// Provider call attempts before giving up on external costs.
const PROVIDER_ATTEMPTS: u32 = 2;

/// Upper bound on a credible provider cell: 10⁹ metres (25 laps around the
/// Earth) or 10⁹ seconds (~31 years). Anything above is garbage data, and
/// the cap keeps path sums far from `u64` overflow.
const MAX_CELL_COST: f64 = 1.0e9;

/// Builds the travel-cost matrix for a start point and its waypoints.
///
/// Node 0 is `start`; nodes 1..=N are `waypoints` in input order. Each cost
/// is rounded to the nearest integer unit: metres under
/// [`Priority::Distance`], seconds under [`Priority::Time`] when the
/// provider supplies durations, haversine metres otherwise. The diagonal
/// stays zero.
///
/// # Examples
///
/// ```
/// use delivery_routing::matrix::build_cost_matrix;
/// use delivery_routing::models::{Coordinate, Priority, Waypoint};
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let stops = vec![Waypoint::new(1u32, Coordinate::new(0.0, 1.0).unwrap())];
/// let m = build_cost_matrix(start, &stops, Priority::Distance, None);
/// assert_eq!(m.size(), 2);
/// // ~111.2 km of equatorial longitude, in metres.
/// assert!(m.get(0, 1) > 111_000 && m.get(0, 1) < 112_000);
/// ```
pub fn build_cost_matrix<Id>(
    start: Coordinate,
    waypoints: &[Waypoint<Id>],
    priority: Priority,
    provider: Option<&dyn TravelCostProvider>,
) -> CostMatrix {
    let mut coords = Vec::with_capacity(waypoints.len() + 1);
    coords.push(start);
    coords.extend(waypoints.iter().map(|w| w.location()));

    let provided = provider.and_then(|p| fetch_travel_matrix(p, &coords));

    let n = coords.len();
    let mut matrix = CostMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let cost = provided
                .as_ref()
                .and_then(|m| m.get(i, j))
                .and_then(|cell| cell_cost(cell, priority))
                .unwrap_or_else(|| haversine(coords[i], coords[j]));
            matrix.set(i, j, cost.round() as u64);
        }
    }
    matrix
}

/// Extracts the cost for the chosen priority, rejecting unusable values.
///
/// Negative, non-finite, and implausibly large values (over
/// [`MAX_CELL_COST`]) all count as unresolved, so the estimator fills in
/// for them like any other hole in the provider data.
fn cell_cost(cell: MatrixCell, priority: Priority) -> Option<f64> {
    let value = match priority {
        Priority::Distance => cell.distance_m,
        Priority::Time => cell.duration_s,
    };
    (0.0..=MAX_CELL_COST).contains(&value).then_some(value)
}

/// Queries the provider with bounded retry, validating the response shape.
fn fetch_travel_matrix(
    provider: &dyn TravelCostProvider,
    coords: &[Coordinate],
) -> Option<TravelMatrix> {
    let mut last_err = None;
    for _ in 0..PROVIDER_ATTEMPTS {
        match provider.travel_matrix(coords) {
            Ok(matrix) if matrix.size() == coords.len() => return Some(matrix),
            Ok(matrix) => {
                warn!(
                    "travel-cost provider returned {}x{} matrix for {} coordinates, \
                     falling back to haversine",
                    matrix.size(),
                    matrix.size(),
                    coords.len()
                );
                return None;
            }
            Err(e) => last_err = Some(e),
        }
    }
    if let Some(e) = last_err {
        warn!("travel-cost provider failed after {PROVIDER_ATTEMPTS} attempts, falling back to haversine: {e}");
    }
    None
}
