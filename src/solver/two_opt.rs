//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For each segment `[i..=j]` of the path, evaluate the path with that
//! segment reversed and accept it whenever the total cost strictly drops.
//! Scanning restarts until a full pass finds no improvement
//! (first-improvement to a local optimum).
//!
//! On an asymmetric matrix a reversal changes every arc inside the segment,
//! not just the two boundary arcs, so candidates are costed over the whole
//! path instead of with the symmetric boundary-delta shortcut.
//!
//! # Complexity
//!
//! O(n³) per pass with full-path costing; delivery-sized instances
//! (tens of stops) converge in a handful of passes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::matrix::CostMatrix;

use super::path_cost;

/// Refines an open path by 2-opt segment reversal.
///
/// The path is `0 → order[0] → ... → order[last]` with no return arc.
/// Returns the improved order and its total cost; the result never costs
/// more than the input. Strict-improvement acceptance under a fixed scan
/// order keeps the outcome deterministic.
///
/// # Examples
///
/// ```
/// use delivery_routing::matrix::CostMatrix;
/// use delivery_routing::solver::two_opt_improve;
///
/// // Line at positions 0..=3, cost = distance * 10; [1, 3, 2] backtracks.
/// let mut m = CostMatrix::new(4);
/// for i in 0..4u64 {
///     for j in 0..4u64 {
///         m.set(i as usize, j as usize, i.abs_diff(j) * 10);
///     }
/// }
/// let (order, cost) = two_opt_improve(&[1, 3, 2], &m);
/// assert_eq!(order, vec![1, 2, 3]);
/// assert_eq!(cost, 30);
/// ```
pub fn two_opt_improve(order: &[usize], matrix: &CostMatrix) -> (Vec<usize>, u64) {
    let mut current = order.to_vec();
    let mut current_cost = path_cost(&current, matrix);
    if current.len() < 2 {
        return (current, current_cost);
    }

    let mut improved = true;
    while improved {
        improved = false;
        let n = current.len();
        for i in 0..n - 1 {
            for j in (i + 1)..n {
                let mut candidate = current.clone();
                candidate[i..=j].reverse();
                let cost = path_cost(&candidate, matrix);
                if cost < current_cost {
                    current = candidate;
                    current_cost = cost;
                    improved = true;
                }
            }
        }
    }
    (current, current_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> CostMatrix {
        let mut m = CostMatrix::new(4);
        for i in 0..4u64 {
            for j in 0..4u64 {
                m.set(i as usize, j as usize, i.abs_diff(j) * 10);
            }
        }
        m
    }

    #[test]
    fn test_already_optimal() {
        let (order, cost) = two_opt_improve(&[1, 2, 3], &line_matrix());
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(cost, 30);
    }

    #[test]
    fn test_fixes_backtracking() {
        // [2, 1, 3] walks 2 out, back to 1, out to 3: cost 20+10+20 = 50.
        let (order, cost) = two_opt_improve(&[2, 1, 3], &line_matrix());
        assert_eq!(cost, 30);
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        let m = line_matrix();
        let (order, cost) = two_opt_improve(&[], &m);
        assert!(order.is_empty());
        assert_eq!(cost, 0);

        let (order, cost) = two_opt_improve(&[2], &m);
        assert_eq!(order, vec![2]);
        assert_eq!(cost, 20);
    }

    #[test]
    fn test_never_worsens() {
        let m = CostMatrix::from_data(
            5,
            vec![
                0, 3, 9, 4, 7, //
                3, 0, 8, 2, 5, //
                9, 8, 0, 6, 1, //
                4, 2, 6, 0, 3, //
                7, 5, 1, 3, 0,
            ],
        )
        .expect("valid");
        for start in [vec![1, 2, 3, 4], vec![4, 3, 2, 1], vec![2, 4, 1, 3]] {
            let before = path_cost(&start, &m);
            let (_, after) = two_opt_improve(&start, &m);
            assert!(after <= before);
        }
    }

    #[test]
    fn test_asymmetric_reversal_costed_fully() {
        // Forward arcs 1→2→3 are cheap, reversed arcs are expensive. With
        // boundary-only deltas a reversal would look attractive; full-path
        // costing must keep the forward order.
        let m = CostMatrix::from_data(
            4,
            vec![
                0, 1, 50, 50, //
                90, 0, 1, 50, //
                1, 90, 0, 1, //
                50, 50, 90, 0,
            ],
        )
        .expect("valid");
        let (order, cost) = two_opt_improve(&[1, 2, 3], &m);
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn test_idempotent() {
        let m = line_matrix();
        let (first, c1) = two_opt_improve(&[3, 1, 2], &m);
        let (second, c2) = two_opt_improve(&first, &m);
        assert_eq!(first, second);
        assert_eq!(c1, c2);
    }
}
