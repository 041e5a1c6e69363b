//! Observation hooks for construction and search.
//!
//! Every component that wants to report progress takes a
//! `&mut M where M: SearchMonitor`; nothing reads process-wide verbosity
//! state. Use [`NoOpMonitor`] to stay silent or [`TracingMonitor`] to emit
//! `tracing` events.

mod log;
mod no_op;

pub use log::TracingMonitor;
pub use no_op::NoOpMonitor;

use std::fmt;

use crate::dispatching::DispatchRule;
use crate::instance::{MachineId, OperationId};
use crate::tabu::{Acceptance, Termination};

/// One accepted tabu-search step.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent<'a> {
    /// 1-based iteration counter after the step.
    pub iteration: usize,
    pub acceptance: Acceptance,
    /// Key of the accepted move.
    pub key: &'a dyn fmt::Debug,
    pub current_cost: i64,
    pub best_cost: i64,
    /// Admissible candidates in the neighborhood.
    pub candidates: usize,
    /// Candidates skipped because their move was tabu.
    pub skipped: usize,
    pub tabu_len: usize,
}

/// How a tabu-search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub termination: Termination,
    pub iterations: usize,
    pub best_cost: i64,
    pub best_iteration: usize,
}

/// Receives progress callbacks. Every hook defaults to doing nothing.
pub trait SearchMonitor {
    /// Name of the monitor.
    fn name(&self) -> &str;

    /// A greedy construction round starts.
    fn on_construction_round(&mut self, _round: usize, _rule: DispatchRule, _remaining: usize) {}

    /// `operation` was appended to `machine`'s sequence.
    fn on_placement(&mut self, _round: usize, _machine: MachineId, _operation: OperationId) {}

    /// `machine` had eligible operations but none passed the security check.
    fn on_machine_blocked(&mut self, _round: usize, _machine: MachineId, _eligible: &[OperationId]) {}

    /// Greedy construction finished with a feasible schedule.
    fn on_construction_done(&mut self, _rounds: usize, _makespan: i64) {}

    /// Tabu search starts from a schedule of the given cost.
    fn on_enter_search(&mut self, _initial_cost: i64) {}

    /// Tabu search accepted a move.
    fn on_iteration(&mut self, _event: &IterationEvent<'_>) {}

    /// Tabu search ended.
    fn on_exit_search(&mut self, _summary: &SearchSummary) {}
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_construction_round(&mut self, round: usize, rule: DispatchRule, remaining: usize) {
        (**self).on_construction_round(round, rule, remaining);
    }

    fn on_placement(&mut self, round: usize, machine: MachineId, operation: OperationId) {
        (**self).on_placement(round, machine, operation);
    }

    fn on_machine_blocked(&mut self, round: usize, machine: MachineId, eligible: &[OperationId]) {
        (**self).on_machine_blocked(round, machine, eligible);
    }

    fn on_construction_done(&mut self, rounds: usize, makespan: i64) {
        (**self).on_construction_done(rounds, makespan);
    }

    fn on_enter_search(&mut self, initial_cost: i64) {
        (**self).on_enter_search(initial_cost);
    }

    fn on_iteration(&mut self, event: &IterationEvent<'_>) {
        (**self).on_iteration(event);
    }

    fn on_exit_search(&mut self, summary: &SearchSummary) {
        (**self).on_exit_search(summary);
    }
}
