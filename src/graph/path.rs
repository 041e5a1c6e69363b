//! Longest-path result.

use crate::instance::OperationId;

/// Longest source → sink path of an acyclic disjunctive graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    /// Operation ids along the path, source and sink excluded.
    pub operations: Vec<OperationId>,
    /// Path length, i.e. the makespan.
    pub makespan: i64,
    /// Earliest start (longest source → node distance) of every operation.
    pub start_times: Vec<i64>,
}

impl CriticalPath {
    /// Number of operations on the path.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
