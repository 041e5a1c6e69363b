//! Evaluated machine sequencings.
//!
//! A [`Schedule`] is a total order of operations per machine together with
//! everything derived from it: critical path, makespan, earliest start
//! times and the block decomposition of the critical path. Schedules are
//! immutable; a neighborhood move produces a new one.

mod block;
mod shop;
mod solution;

pub use block::{decompose_blocks, Block};
pub use shop::JobShop;
pub use solution::{Schedule, ScheduleSummary};
