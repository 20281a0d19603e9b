//! Dense travel-cost matrix.

/// A dense n×n matrix of non-negative integer travel costs, row-major.
///
/// Node 0 is the start point; nodes 1..n are waypoints in caller-supplied
/// order. Costs are asymmetric-capable (`get(i, j)` need not equal
/// `get(j, i)` — real travel times differ by direction). The diagonal is
/// left at zero and never consulted by the solver. Integer storage keeps
/// path-sum comparisons exact, avoiding floating-point tie instability.
///
/// # Examples
///
/// ```
/// use delivery_routing::matrix::CostMatrix;
///
/// let mut m = CostMatrix::new(3);
/// m.set(0, 1, 500);
/// m.set(1, 0, 700);
/// assert_eq!(m.get(0, 1), 500);
/// assert_eq!(m.get(1, 0), 700);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<u64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: u64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes (start point plus waypoints).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of waypoint nodes (excluding the start point).
    pub fn num_waypoints(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Returns `true` if costs are direction-independent.
    ///
    /// Estimator-built matrices are always symmetric; provider-built ones
    /// usually are not. Useful to callers diagnosing provider data.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
