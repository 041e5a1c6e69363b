use std::collections::VecDeque;

use crate::instance::{Instance, MachineId, OperationId};

/// Operations still waiting to be sequenced.
///
/// Keeps one queue per (machine, job) pair holding that job's unplaced
/// operations on that machine, in job order. Only queue heads are
/// eligible, which enforces job order among same-machine operations.
#[derive(Debug, Clone)]
pub struct GroundSet {
    queues: Vec<Vec<VecDeque<OperationId>>>,
    placed: Vec<bool>,
    remaining: usize,
}

impl GroundSet {
    pub fn new(instance: &Instance) -> Self {
        let mut queues = vec![vec![VecDeque::new(); instance.job_count()]; instance.machine_count()];
        for job in instance.jobs() {
            for &op in &job.operations {
                queues[instance.operation(op).machine][job.id].push_back(op);
            }
        }

        Self {
            queues,
            placed: vec![false; instance.operation_count()],
            remaining: instance.operation_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of unplaced operations.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Eligible operations of `machine`: the head of every non-empty job
    /// queue, in job order.
    pub fn heads(&self, machine: MachineId) -> Vec<OperationId> {
        self.queues[machine]
            .iter()
            .filter_map(|queue| queue.front().copied())
            .collect()
    }

    /// Security condition: every earlier operation of `op`'s job that runs
    /// on a different machine is already placed.
    pub fn is_secure(&self, instance: &Instance, op: OperationId) -> bool {
        let operation = instance.operation(op);
        let job = instance.job(operation.job);
        job.operations[..operation.position].iter().all(|&earlier| {
            self.placed[earlier] || instance.operation(earlier).machine == operation.machine
        })
    }

    /// Removes `op` from its queue and marks it placed.
    ///
    /// Returns `false`, leaving the set untouched, if `op` is not the head
    /// of its queue.
    pub fn place(&mut self, instance: &Instance, op: OperationId) -> bool {
        let operation = instance.operation(op);
        let queue = &mut self.queues[operation.machine][operation.job];
        if queue.front() != Some(&op) {
            return false;
        }
        queue.pop_front();
        self.placed[op] = true;
        self.remaining -= 1;
        true
    }

    /// `placed()[op]` tells whether `op` has been sequenced.
    pub fn placed(&self) -> &[bool] {
        &self.placed
    }
}
