//! Disjunctive graph representation of a job-shop schedule.
//!
//! Nodes are a virtual source, a virtual sink, and one node per operation.
//!
//! - **Conjunctive edges** are fixed by the instance: source → first
//!   operation of each job, each operation → its job successor, last
//!   operation of each job → sink.
//! - **Disjunctive edges** encode a sequencing decision: consecutive
//!   operations in a machine's processing order.
//!
//! Every edge weighs the duration of its tail node (0 when leaving the
//! source), so the longest source → sink path length is the makespan.
//!
//! The conjunctive part is built once per instance and shared behind an
//! [`Arc`](std::sync::Arc). A [`DisjunctiveGraph`] adds one machine
//! sequencing on top of it without touching the shared base, so any number
//! of candidates can be evaluated from the same pristine base.
//!
//! # Reference
//!
//! Roy, B. & Sussmann, B. (1964). "Les problèmes d'ordonnancement avec
//! contraintes disjonctives", Note DS no. 9 bis, SEMA.

mod conjunctive;
mod disjunctive;
mod path;

pub use conjunctive::ConjunctiveGraph;
pub use disjunctive::{CycleDetected, DisjunctiveGraph};
pub use path::CriticalPath;

use crate::instance::OperationId;

/// A node of the disjunctive graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Source,
    Operation(OperationId),
    Sink,
}

/// Whether an edge comes from job order or from a machine sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Conjunctive,
    Disjunctive,
}

/// A weighted, directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    /// Duration of the tail node, or 0 when `from` is the source.
    pub weight: i64,
    pub kind: EdgeKind,
}
