//! Exact open-path solver by permutation enumeration.
//!
//! # Algorithm
//!
//! Depth-first enumeration of every permutation of the waypoint nodes in
//! lexicographic order, accumulating the open-path cost from node 0 with
//! saturating addition. A branch whose partial cost already exceeds the
//! best complete cost is pruned: with non-negative costs it cannot recover,
//! so pruning never changes the result. Ties go to the first order
//! discovered.
//!
//! # Complexity
//!
//! O(n!) — callers bound n via [`SolverConfig::exact_limit`](super::SolverConfig).

use crate::matrix::CostMatrix;

/// Returns the minimum-cost visiting order of waypoint nodes 1..=N.
///
/// The start is fixed at node 0 and the path is open (no return arc). Among
/// equal-cost orders the lexicographically smallest wins, because it is
/// enumerated first. The matrix must have at least one waypoint node.
///
/// # Examples
///
/// ```
/// use delivery_routing::matrix::CostMatrix;
/// use delivery_routing::solver::brute_force;
///
/// // 0→1 costs 10, 0→2 costs 30, 1→2 costs 10, 2→1 costs 30.
/// let m = CostMatrix::from_data(3, vec![0, 10, 30, 50, 0, 10, 50, 30, 0]).unwrap();
/// assert_eq!(brute_force(&m), vec![1, 2]); // 10 + 10 beats 30 + 30
/// ```
pub fn brute_force(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.num_waypoints();
    let mut best_order = Vec::new();
    let mut best_cost = u64::MAX;
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n + 1];
    descend(
        matrix,
        &mut current,
        &mut used,
        0,
        0,
        &mut best_order,
        &mut best_cost,
    );
    best_order
}

fn descend(
    matrix: &CostMatrix,
    current: &mut Vec<usize>,
    used: &mut [bool],
    last: usize,
    cost_so_far: u64,
    best_order: &mut Vec<usize>,
    best_cost: &mut u64,
) {
    let n = matrix.num_waypoints();
    if current.len() == n {
        // Strict improvement only: equal-cost orders keep the first found.
        // The first complete path is always recorded, even at a saturated
        // u64::MAX total, so extreme matrices still yield a full order.
        if cost_so_far < *best_cost || best_order.is_empty() {
            *best_cost = cost_so_far;
            best_order.clear();
            best_order.extend_from_slice(current);
        }
        return;
    }
    for node in 1..=n {
        if used[node] {
            continue;
        }
        let cost = cost_so_far.saturating_add(matrix.get(last, node));
        if cost > *best_cost {
            continue;
        }
        used[node] = true;
        current.push(node);
        descend(matrix, current, used, node, cost, best_order, best_cost);
        current.pop();
        used[node] = false;
    }
}
