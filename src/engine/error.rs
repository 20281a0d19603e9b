//! Engine error types.

use thiserror::Error;

use crate::solver::SolveFailure;

/// Failure modes of [`optimize`](super::optimize).
///
/// Provider failures never appear here: they are recovered inside the
/// matrix builder via the estimator fallback and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The request was malformed: no waypoints, or a coordinate outside the
    /// valid latitude/longitude ranges.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The solver found no feasible visiting order.
    #[error("no feasible visiting order")]
    NoSolution,
    /// The waypoint count exceeds the exact-solve bound and heuristic
    /// fallback is disabled.
    #[error("{waypoints} waypoints exceed the exact-solve limit of {limit}")]
    SolverOverload {
        /// Requested waypoint count.
        waypoints: usize,
        /// Configured exact-solve bound.
        limit: usize,
    },
}

impl From<SolveFailure> for OptimizeError {
    fn from(failure: SolveFailure) -> Self {
        match failure {
            SolveFailure::NoSolution => Self::NoSolution,
            SolveFailure::Overload { waypoints, limit } => {
                Self::SolverOverload { waypoints, limit }
            }
        }
    }
}
