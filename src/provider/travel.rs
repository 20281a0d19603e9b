//! Travel-cost provider trait and batched matrix response types.

use thiserror::Error;

use crate::models::Coordinate;

/// One resolved element of a provider response.
///
/// Carries both measures so a single batched call serves either cost
/// priority: road distance in metres and driving duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCell {
    /// Road distance in metres.
    pub distance_m: f64,
    /// Travel duration in seconds.
    pub duration_s: f64,
}

/// A square grid of provider results, indexed `[from][to]`.
///
/// `None` marks an element the source could not resolve (the equivalent of a
/// non-`OK` element status in a distance-matrix API response); the builder
/// substitutes the straight-line estimator for such cells. Rows and columns
/// follow the coordinate order of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    cells: Vec<Vec<Option<MatrixCell>>>,
}

impl TravelMatrix {
    /// Creates a travel matrix from a grid of optional cells.
    ///
    /// Returns `None` unless the grid is square (every row as long as the
    /// row count).
    pub fn new(cells: Vec<Vec<Option<MatrixCell>>>) -> Option<Self> {
        let n = cells.len();
        if cells.iter().any(|row| row.len() != n) {
            return None;
        }
        Some(Self { cells })
    }

    /// Number of rows/columns.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The element from node `from` to node `to`, if the source resolved it.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<MatrixCell> {
        self.cells[from][to]
    }
}

/// Errors from a travel-cost provider.
///
/// All variants are recovered inside the matrix builder by falling back to
/// the straight-line estimator; none of them reaches the engine's caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request was empty or otherwise malformed.
    #[error("empty coordinate list")]
    EmptyInput,
    /// The external source failed or returned an unusable response.
    #[error("travel-cost source unavailable: {0}")]
    Unavailable(String),
    /// The call did not complete within the provider's own deadline.
    #[error("travel-cost request timed out")]
    Timeout,
}

/// Batched pairwise travel costs for a set of coordinates.
///
/// Implementations must make a single round trip per call (never one call
/// per pair) and return a matrix with the same row/column count as
/// `coords`. Network, caching, and timeout policy all live behind this
/// trait; a timeout is reported as [`ProviderError::Timeout`] and treated
/// like any other failure. The trait object is injected into each optimize
/// call, so tests substitute deterministic stubs without global state.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
/// use delivery_routing::provider::{
///     MatrixCell, ProviderError, TravelCostProvider, TravelMatrix,
/// };
///
/// struct FlatProvider;
///
/// impl TravelCostProvider for FlatProvider {
///     fn travel_matrix(&self, coords: &[Coordinate]) -> Result<TravelMatrix, ProviderError> {
///         if coords.is_empty() {
///             return Err(ProviderError::EmptyInput);
///         }
///         let n = coords.len();
///         let cell = MatrixCell { distance_m: 1000.0, duration_s: 60.0 };
///         let grid = (0..n)
///             .map(|i| (0..n).map(|j| (i != j).then_some(cell)).collect())
///             .collect();
///         TravelMatrix::new(grid).ok_or(ProviderError::EmptyInput)
///     }
/// }
///
/// let coords = vec![Coordinate::new(0.0, 0.0).unwrap(), Coordinate::new(0.0, 1.0).unwrap()];
/// let m = FlatProvider.travel_matrix(&coords)?;
/// assert_eq!(m.size(), 2);
/// assert!(m.get(0, 0).is_none());
/// # Ok::<(), ProviderError>(())
/// ```
pub trait TravelCostProvider {
    /// Returns pairwise travel costs for `coords` in a single round trip.
    fn travel_matrix(&self, coords: &[Coordinate]) -> Result<TravelMatrix, ProviderError>;
}
