//! Construction state visible to dispatching rules.

use crate::instance::{Instance, Operation, OperationId};

/// Read-only view of the construction state at the moment a machine picks
/// its next operation.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    instance: &'a Instance,
    placed: &'a [bool],
}

impl<'a> DispatchContext<'a> {
    /// Creates a context. `placed[op]` tells whether `op` is already sequenced.
    pub fn new(instance: &'a Instance, placed: &'a [bool]) -> Self {
        debug_assert_eq!(placed.len(), instance.operation_count());
        Self { instance, placed }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn is_placed(&self, op: OperationId) -> bool {
        self.placed[op]
    }

    /// Same-job successors of `op` that are not yet sequenced.
    pub fn pending_successors(&self, op: OperationId) -> impl Iterator<Item = &'a Operation> + 'a {
        let instance = self.instance;
        let placed = self.placed;
        instance
            .successors(op)
            .iter()
            .filter(move |&&succ| !placed[succ])
            .map(move |&succ| instance.operation(succ))
    }

    /// Number of pending same-job successors.
    pub fn pending_successor_count(&self, op: OperationId) -> usize {
        self.pending_successors(op).count()
    }

    /// Total duration of pending same-job successors (remaining work).
    pub fn pending_successor_work(&self, op: OperationId) -> i64 {
        self.pending_successors(op).map(|s| s.duration).sum()
    }
}
