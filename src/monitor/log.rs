use super::{IterationEvent, SearchMonitor, SearchSummary};
use crate::dispatching::DispatchRule;
use crate::instance::{MachineId, OperationId};

/// Forwards every event to `tracing`.
///
/// Construction placements go to `TRACE`, rounds and search iterations to
/// `DEBUG`, and start/end of a search to `INFO`. Install a subscriber in the
/// binary to see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TracingMonitor;

impl TracingMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl SearchMonitor for TracingMonitor {
    fn name(&self) -> &str {
        "TracingMonitor"
    }

    fn on_construction_round(&mut self, round: usize, rule: DispatchRule, remaining: usize) {
        tracing::debug!(round, %rule, remaining, "construction round");
    }

    fn on_placement(&mut self, round: usize, machine: MachineId, operation: OperationId) {
        tracing::trace!(round, machine, operation, "placed operation");
    }

    fn on_machine_blocked(&mut self, round: usize, machine: MachineId, eligible: &[OperationId]) {
        tracing::trace!(round, machine, ?eligible, "no eligible operation passed the security check");
    }

    fn on_construction_done(&mut self, rounds: usize, makespan: i64) {
        tracing::debug!(rounds, makespan, "greedy construction finished");
    }

    fn on_enter_search(&mut self, initial_cost: i64) {
        tracing::info!(initial_cost, "tabu search started");
    }

    fn on_iteration(&mut self, event: &IterationEvent<'_>) {
        tracing::debug!(
            iteration = event.iteration,
            acceptance = ?event.acceptance,
            key = ?event.key,
            current = event.current_cost,
            best = event.best_cost,
            candidates = event.candidates,
            skipped = event.skipped,
            tabu_len = event.tabu_len,
            "tabu step"
        );
    }

    fn on_exit_search(&mut self, summary: &SearchSummary) {
        tracing::info!(
            termination = ?summary.termination,
            iterations = summary.iterations,
            best = summary.best_cost,
            best_iteration = summary.best_iteration,
            "tabu search finished"
        );
    }
}
