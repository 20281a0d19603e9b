//! Open-path route solvers.
//!
//! Finds the visiting order of waypoint nodes 1..=N minimizing total cost,
//! with the start fixed at node 0 and no return arc (open-path TSP over a
//! possibly asymmetric matrix).
//!
//! - [`brute_force`] — exact enumeration, bounded by [`SolverConfig::exact_limit`]
//! - [`cheapest_arc`] — greedy construction for larger instances
//! - [`two_opt_improve`] — segment-reversal refinement of a constructed path
//!
//! [`solve`] picks the path: exact up to the configured limit, then the
//! constructive heuristic plus 2-opt when fallback is enabled, otherwise an
//! [`SolveFailure::Overload`] so an oversized request is refused rather than
//! silently degraded.

mod brute_force;
mod cheapest_arc;
mod two_opt;

pub use brute_force::brute_force;
pub use cheapest_arc::cheapest_arc;
pub use two_opt::two_opt_improve;

use log::debug;
use thiserror::Error;

use crate::matrix::CostMatrix;

/// Default exact-solve bound: 9! ≈ 363k permutations, well under a second.
pub const DEFAULT_EXACT_LIMIT: usize = 9;

/// Solver failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveFailure {
    /// No feasible visiting order exists (no waypoint nodes).
    #[error("no feasible visiting order")]
    NoSolution,
    /// The instance exceeds the exact bound and heuristics are disabled.
    #[error("{waypoints} waypoints exceed the exact-solve limit of {limit}")]
    Overload {
        /// Requested waypoint count.
        waypoints: usize,
        /// Configured exact-solve bound.
        limit: usize,
    },
}

/// Solve-path configuration.
///
/// # Examples
///
/// ```
/// use delivery_routing::solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.exact_limit, 9);
/// assert!(config.heuristic_fallback);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest waypoint count solved exactly by enumeration.
    pub exact_limit: usize,
    /// Whether instances over `exact_limit` use the heuristic path.
    ///
    /// When `false`, oversized instances fail with [`SolveFailure::Overload`]
    /// instead of returning a non-guaranteed order.
    pub heuristic_fallback: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_limit: DEFAULT_EXACT_LIMIT,
            heuristic_fallback: true,
        }
    }
}

/// Computes the minimum-cost visiting order over `matrix`.
///
/// Returns waypoint node indices (1..=N) in visiting order. Deterministic:
/// equal-cost orders resolve to the first one discovered under a fixed scan
/// order, so identical matrices always yield identical routes.
///
/// # Examples
///
/// ```
/// use delivery_routing::matrix::CostMatrix;
/// use delivery_routing::solver::{solve, SolverConfig};
///
/// // start → 2 → 1 is cheapest: 1 + 1 = 2
/// let m = CostMatrix::from_data(3, vec![0, 9, 1, 9, 0, 9, 9, 1, 0]).unwrap();
/// let order = solve(&m, SolverConfig::default()).unwrap();
/// assert_eq!(order, vec![2, 1]);
/// ```
pub fn solve(matrix: &CostMatrix, config: SolverConfig) -> Result<Vec<usize>, SolveFailure> {
    let n = matrix.num_waypoints();
    if n == 0 {
        return Err(SolveFailure::NoSolution);
    }
    if n <= config.exact_limit {
        debug!("solving {n} waypoints exactly");
        return Ok(brute_force(matrix));
    }
    if !config.heuristic_fallback {
        return Err(SolveFailure::Overload {
            waypoints: n,
            limit: config.exact_limit,
        });
    }
    debug!(
        "{n} waypoints over exact limit {}, using cheapest-arc + 2-opt",
        config.exact_limit
    );
    let constructed = cheapest_arc(matrix);
    let (improved, _) = two_opt_improve(&constructed, matrix);
    Ok(improved)
}

/// Total cost of the open path `0 → order[0] → ... → order[last]`.
///
/// Saturates at `u64::MAX` instead of wrapping, so caller-supplied matrices
/// with extreme costs degrade to "effectively unreachable" rather than to a
/// wrong comparison.
pub fn path_cost(order: &[usize], matrix: &CostMatrix) -> u64 {
    let mut cost: u64 = 0;
    let mut prev = 0;
    for &node in order {
        cost = cost.saturating_add(matrix.get(prev, node));
        prev = node;
    }
    cost
}
