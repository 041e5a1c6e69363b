//! Greedy schedule construction.
//!
//! The constructor repeatedly lets every machine pick its next operation
//! among the heads of its per-job queues ("pruning"), ranked by a
//! [`DispatchRule`](crate::dispatching::DispatchRule). An operation may be
//! picked only when no earlier operation of its job is still waiting on
//! another machine (the security condition), which keeps the resulting
//! sequencing acyclic.

mod greedy;
mod ground_set;

pub use greedy::GreedyConstructor;
pub use ground_set::GroundSet;
