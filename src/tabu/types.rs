//! Core trait for tabu-search problems.

use std::fmt;

/// A neighbor reached from the incumbent by one move.
///
/// The `key` identifies the move in the tabu list. Keys compare equal when
/// the moves they describe are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuMove<S, K> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Identifies this move for tabu tracking.
    pub key: K,
    /// Cost of the resulting solution.
    pub cost: i64,
}

/// A minimization problem explored by [`TabuSearch`](super::TabuSearch).
///
/// Implementors describe:
/// - how to evaluate a solution's cost
/// - how to enumerate the admissible neighbors of a solution
/// - which move undoes a given move
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Send;

    /// Move identifier stored in the tabu list.
    type Key: Clone + Eq + fmt::Debug + Send;

    /// Cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> i64;

    /// Admissible neighbors of `solution`.
    ///
    /// Order matters only among neighbors of equal cost: the search scans
    /// them in the order returned.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<TabuMove<Self::Solution, Self::Key>>;

    /// The move that reverts `key`.
    fn inverse(&self, key: &Self::Key) -> Self::Key;
}
