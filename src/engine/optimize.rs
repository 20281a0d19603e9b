//! Route optimization entry point.

use log::debug;

use crate::matrix::build_cost_matrix;
use crate::models::{Coordinate, Priority, Route, Waypoint};
use crate::provider::TravelCostProvider;
use crate::solver::{path_cost, solve, SolverConfig};

use super::error::OptimizeError;
use super::mapper::map_order;

/// Computes the cheapest visiting order for a set of delivery waypoints.
///
/// Uses the default [`SolverConfig`]: exact enumeration up to 9 waypoints,
/// cheapest-arc + 2-opt beyond. The provider, when given, is queried once
/// for the whole matrix; any provider failure falls back to straight-line
/// estimates and never fails the call. Identical inputs with a
/// deterministic cost source always produce the identical route.
///
/// # Errors
///
/// - [`OptimizeError::InvalidInput`] — empty waypoint set.
/// - [`OptimizeError::NoSolution`] — solver found no feasible order.
///
/// Coordinate range validity is enforced by [`Coordinate::new`] before a
/// request can be assembled.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Priority, Waypoint};
/// use delivery_routing::optimize;
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Waypoint::new("far", Coordinate::new(0.0, 2.0).unwrap()),
///     Waypoint::new("near", Coordinate::new(0.0, 1.0).unwrap()),
/// ];
/// let route = optimize(start, &stops, Priority::Distance, None).unwrap();
/// assert_eq!(route.stops(), &["near", "far"]);
/// ```
pub fn optimize<Id: Clone>(
    start: Coordinate,
    waypoints: &[Waypoint<Id>],
    priority: Priority,
    provider: Option<&dyn TravelCostProvider>,
) -> Result<Route<Id>, OptimizeError> {
    Optimizer::new().optimize(start, waypoints, priority, provider)
}

/// Route optimizer with a configurable solve path.
///
/// A stateless handle: each [`optimize`](Optimizer::optimize) call is
/// independent, holds no shared mutable state, and performs no I/O beyond
/// the single batched provider call, so one `Optimizer` can serve
/// concurrent requests freely.
///
/// # Examples
///
/// ```
/// use delivery_routing::engine::Optimizer;
/// use delivery_routing::solver::SolverConfig;
///
/// let strict = Optimizer::with_config(SolverConfig {
///     exact_limit: 6,
///     heuristic_fallback: false,
/// });
/// assert_eq!(strict.config().exact_limit, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: SolverConfig,
}

impl Optimizer {
    /// Creates an optimizer with the default solver configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with an explicit solver configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active solver configuration.
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Computes the cheapest visiting order; see the crate-level [`optimize`].
    ///
    /// # Errors
    ///
    /// [`OptimizeError::InvalidInput`] for an empty waypoint set,
    /// [`OptimizeError::NoSolution`] if the solver finds no order, and
    /// [`OptimizeError::SolverOverload`] when the waypoint count exceeds
    /// [`SolverConfig::exact_limit`] with `heuristic_fallback` disabled.
    pub fn optimize<Id: Clone>(
        &self,
        start: Coordinate,
        waypoints: &[Waypoint<Id>],
        priority: Priority,
        provider: Option<&dyn TravelCostProvider>,
    ) -> Result<Route<Id>, OptimizeError> {
        if waypoints.is_empty() {
            return Err(OptimizeError::InvalidInput(
                "empty waypoint set".to_string(),
            ));
        }

        let matrix = build_cost_matrix(start, waypoints, priority, provider);
        let order = solve(&matrix, self.config)?;
        let total_cost = path_cost(&order, &matrix);
        debug!(
            "optimized {} waypoints, total cost {total_cost}",
            waypoints.len()
        );
        Ok(Route::new(map_order(&order, waypoints), total_cost, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MatrixCell, ProviderError, TravelMatrix};
    use proptest::prelude::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid test coordinate")
    }

    /// start=(0,0), A=(0,1), B=(0,2), C=(0,3) — the collinear fixture.
    fn collinear() -> (Coordinate, Vec<Waypoint<char>>) {
        let start = coord(0.0, 0.0);
        let stops = vec![
            Waypoint::new('B', coord(0.0, 2.0)),
            Waypoint::new('A', coord(0.0, 1.0)),
            Waypoint::new('C', coord(0.0, 3.0)),
        ];
        (start, stops)
    }

    struct FailingProvider;

    impl TravelCostProvider for FailingProvider {
        fn travel_matrix(&self, _coords: &[Coordinate]) -> Result<TravelMatrix, ProviderError> {
            Err(ProviderError::Unavailable("forced failure".to_string()))
        }
    }

    #[test]
    fn test_collinear_monotonic_order() {
        let (start, stops) = collinear();
        let route = optimize(start, &stops, Priority::Distance, None).expect("route");
        assert_eq!(route.stops(), &['A', 'B', 'C']);
        // ~333.6 km of equatorial longitude walked outward.
        assert!(route.total_cost() > 333_000 && route.total_cost() < 334_000);
    }

    #[test]
    fn test_empty_waypoints_invalid_input() {
        let stops: Vec<Waypoint<u32>> = vec![];
        let err = optimize(coord(0.0, 0.0), &stops, Priority::Time, None).expect_err("empty");
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn test_provider_failure_still_routes() {
        let (start, stops) = collinear();
        let route =
            optimize(start, &stops, Priority::Time, Some(&FailingProvider)).expect("fallback");
        assert_eq!(route.stops(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_partial_provider_matrix_still_routes() {
        struct OneHoleProvider;

        impl TravelCostProvider for OneHoleProvider {
            fn travel_matrix(
                &self,
                coords: &[Coordinate],
            ) -> Result<TravelMatrix, ProviderError> {
                let n = coords.len();
                let cell = MatrixCell {
                    distance_m: 1000.0,
                    duration_s: 100.0,
                };
                let mut grid: Vec<Vec<Option<MatrixCell>>> = (0..n)
                    .map(|i| (0..n).map(|j| (i != j).then_some(cell)).collect())
                    .collect();
                grid[1][2] = None;
                TravelMatrix::new(grid).ok_or(ProviderError::EmptyInput)
            }
        }

        let (start, stops) = collinear();
        let route =
            optimize(start, &stops, Priority::Time, Some(&OneHoleProvider)).expect("route");
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn test_absurd_provider_costs_fall_back() {
        // A source claiming ~10¹⁹ m between every pair once summed would
        // overflow u64 path totals; those cells count as unresolved and the
        // estimator supplies the costs instead.
        struct HugeProvider;

        impl TravelCostProvider for HugeProvider {
            fn travel_matrix(
                &self,
                coords: &[Coordinate],
            ) -> Result<TravelMatrix, ProviderError> {
                let n = coords.len();
                let cell = MatrixCell {
                    distance_m: 1.0e19,
                    duration_s: 1.0e19,
                };
                let grid = (0..n)
                    .map(|i| (0..n).map(|j| (i != j).then_some(cell)).collect())
                    .collect();
                TravelMatrix::new(grid).ok_or(ProviderError::EmptyInput)
            }
        }

        let (start, stops) = collinear();
        let route =
            optimize(start, &stops, Priority::Distance, Some(&HugeProvider)).expect("route");
        assert_eq!(route.stops(), &['A', 'B', 'C']);
        // Haversine totals, not provider garbage.
        assert!(route.total_cost() < 400_000);
    }

    #[test]
    fn test_idempotent() {
        let (start, stops) = collinear();
        let a = optimize(start, &stops, Priority::Distance, None).expect("route");
        let b = optimize(start, &stops, Priority::Distance, None).expect("route");
        assert_eq!(a, b);
    }

    #[test]
    fn test_overload_with_fallback_disabled() {
        let (start, stops) = collinear();
        let strict = Optimizer::with_config(SolverConfig {
            exact_limit: 2,
            heuristic_fallback: false,
        });
        let err = strict
            .optimize(start, &stops, Priority::Distance, None)
            .expect_err("over limit");
        assert_eq!(
            err,
            OptimizeError::SolverOverload {
                waypoints: 3,
                limit: 2
            }
        );
    }

    #[test]
    fn test_heuristic_over_limit_still_routes() {
        let (start, stops) = collinear();
        let loose = Optimizer::with_config(SolverConfig {
            exact_limit: 2,
            heuristic_fallback: true,
        });
        let route = loose
            .optimize(start, &stops, Priority::Distance, None)
            .expect("heuristic route");
        assert_eq!(route.stops(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_route_carries_priority() {
        let (start, stops) = collinear();
        let route = optimize(start, &stops, Priority::Time, None).expect("route");
        assert_eq!(route.priority(), Priority::Time);
    }

    proptest! {
        #[test]
        fn prop_stops_preserve_waypoint_ids(
            coords in proptest::collection::vec((-80.0f64..80.0, -170.0f64..170.0), 1..7)
        ) {
            let start = coord(10.0, 10.0);
            let waypoints: Vec<Waypoint<usize>> = coords
                .iter()
                .enumerate()
                .map(|(i, &(lat, lon))| Waypoint::new(i, coord(lat, lon)))
                .collect();

            let route = optimize(start, &waypoints, Priority::Distance, None)
                .expect("valid non-empty input always routes");
            let mut ids = route.stops().to_vec();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..waypoints.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_optimize_is_deterministic(
            coords in proptest::collection::vec((-80.0f64..80.0, -170.0f64..170.0), 1..6)
        ) {
            let start = coord(0.0, 0.0);
            let waypoints: Vec<Waypoint<usize>> = coords
                .iter()
                .enumerate()
                .map(|(i, &(lat, lon))| Waypoint::new(i, coord(lat, lon)))
                .collect();

            let a = optimize(start, &waypoints, Priority::Time, None).expect("route");
            let b = optimize(start, &waypoints, Priority::Time, None).expect("route");
            prop_assert_eq!(a, b);
        }
    }
}
