//! A conjunctive base plus one machine sequencing.

use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;

use super::{ConjunctiveGraph, CriticalPath, Edge, EdgeKind, Node};
use crate::instance::OperationId;

/// The graph contains a directed cycle.
///
/// `blocked` is the lowest-id operation that a topological sort could not
/// reach; it lies on or behind a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation {blocked} is blocked by a precedence cycle")]
pub struct CycleDetected {
    pub blocked: OperationId,
}

/// Disjunctive graph for one (complete or partial) machine sequencing.
///
/// Holds the shared conjunctive base and only the per-operation machine
/// links derived from the sequences. Building one never mutates the base.
#[derive(Debug, Clone)]
pub struct DisjunctiveGraph {
    base: Arc<ConjunctiveGraph>,
    machine_next: Vec<Option<OperationId>>,
}

impl DisjunctiveGraph {
    /// Adds a disjunctive edge between every pair of consecutive operations
    /// in each sequence.
    ///
    /// Each operation should appear at most once across all sequences;
    /// [`crate::schedule::Schedule::evaluate`] checks this before building.
    ///
    /// # Panics
    /// Panics if a sequence names an operation id outside the base.
    pub fn new(base: Arc<ConjunctiveGraph>, sequences: &[Vec<OperationId>]) -> Self {
        let n = base.operation_count();
        let mut machine_next = vec![None; n];

        for sequence in sequences {
            for pair in sequence.windows(2) {
                debug_assert_eq!(base.machine(pair[0]), base.machine(pair[1]));
                machine_next[pair[0]] = Some(pair[1]);
            }
        }

        Self {
            base,
            machine_next,
        }
    }

    /// The shared conjunctive base.
    pub fn base(&self) -> &ConjunctiveGraph {
        &self.base
    }

    /// Disjunctive edges only.
    pub fn disjunctive_edges(&self) -> Vec<Edge> {
        self.machine_next
            .iter()
            .enumerate()
            .filter_map(|(op, next)| {
                next.map(|next| Edge {
                    from: Node::Operation(op),
                    to: Node::Operation(next),
                    weight: self.base.duration(op),
                    kind: EdgeKind::Disjunctive,
                })
            })
            .collect()
    }

    /// Conjunctive followed by disjunctive edges.
    ///
    /// A disjunctive edge may run parallel to a conjunctive one when a job
    /// visits the same machine twice in a row.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = self.base.edges();
        edges.extend(self.disjunctive_edges());
        edges
    }

    fn successors(&self, op: OperationId) -> impl Iterator<Item = OperationId> {
        self.base
            .job_successor(op)
            .into_iter()
            .chain(self.machine_next[op])
    }

    /// Operations in topological order (Kahn's algorithm).
    ///
    /// # Errors
    /// Returns [`CycleDetected`] if the sequencing closes a cycle.
    pub fn topological_order(&self) -> Result<Vec<OperationId>, CycleDetected> {
        let n = self.base.operation_count();
        let mut indegree = vec![0usize; n];
        for op in 0..n {
            for next in self.successors(op) {
                indegree[next] += 1;
            }
        }

        let mut queue: VecDeque<OperationId> = (0..n).filter(|&op| indegree[op] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(op) = queue.pop_front() {
            order.push(op);
            for next in self.successors(op) {
                indegree[next] -= 1;
                if indegree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        match (0..n).find(|&op| indegree[op] > 0) {
            Some(blocked) => Err(CycleDetected { blocked }),
            None => Ok(order),
        }
    }

    /// Whether the graph is a DAG.
    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_ok()
    }

    /// Longest source → sink path by dynamic programming over a
    /// topological order.
    ///
    /// Among equally long incoming paths the first one relaxed wins, and
    /// among equally late jobs the lowest job index ends the path, so the
    /// result is deterministic.
    ///
    /// # Errors
    /// Returns [`CycleDetected`] if the graph is cyclic.
    pub fn critical_path(&self) -> Result<CriticalPath, CycleDetected> {
        let order = self.topological_order()?;
        let n = self.base.operation_count();

        let mut start_times = vec![0i64; n];
        let mut via: Vec<Option<OperationId>> = vec![None; n];

        for &op in &order {
            let finish = start_times[op] + self.base.duration(op);
            for next in self.successors(op) {
                if finish > start_times[next] {
                    start_times[next] = finish;
                    via[next] = Some(op);
                }
            }
        }

        let mut makespan = 0;
        let mut last = None;
        for &tail in self.base.job_tails() {
            let finish = start_times[tail] + self.base.duration(tail);
            if finish > makespan {
                makespan = finish;
                last = Some(tail);
            }
        }

        let mut operations = Vec::new();
        let mut cursor = last;
        while let Some(op) = cursor {
            operations.push(op);
            cursor = via[op];
        }
        operations.reverse();

        Ok(CriticalPath {
            operations,
            makespan,
            start_times,
        })
    }
}
