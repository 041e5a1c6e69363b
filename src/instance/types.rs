//! Plain records for operations, jobs and machines.

use std::fmt;

/// Index of an operation in [`Instance::operations`](super::Instance::operations).
pub type OperationId = usize;

/// Index of a job in [`Instance::jobs`](super::Instance::jobs).
pub type JobId = usize;

/// Index of a machine in [`Instance::machines`](super::Instance::machines).
pub type MachineId = usize;

/// A single processing step of a job on a fixed machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    /// Dense id, equal to the index in the operation pool.
    pub id: OperationId,
    /// Owning job.
    pub job: JobId,
    /// Position within the owning job (0 = first).
    pub position: usize,
    /// Machine this operation must run on.
    pub machine: MachineId,
    /// Processing time, always positive.
    pub duration: i64,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "O{} (d={}, j={}, M={})",
            self.id, self.duration, self.job, self.machine
        )
    }
}

/// An ordered chain of operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub id: JobId,
    /// Operation ids in execution order.
    pub operations: Vec<OperationId>,
}

impl Job {
    /// Number of operations in this job.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the job has no operations (never true for a validated instance).
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// First operation of the job.
    pub fn first(&self) -> Option<OperationId> {
        self.operations.first().copied()
    }

    /// Last operation of the job.
    pub fn last(&self) -> Option<OperationId> {
        self.operations.last().copied()
    }
}

/// A machine and the operations assigned to it.
///
/// The assignment is derived from the operation pool. The order in which a
/// machine processes its operations is a sequencing decision and lives in a
/// [`Schedule`](crate::schedule::Schedule), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Machine {
    pub id: MachineId,
    /// Assigned operation ids, ascending.
    pub operations: Vec<OperationId>,
}

impl Machine {
    /// Total processing time assigned to this machine.
    pub fn load(&self, operations: &[Operation]) -> i64 {
        self.operations.iter().map(|&op| operations[op].duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        let op = Operation {
            id: 4,
            job: 1,
            position: 2,
            machine: 0,
            duration: 7,
        };
        assert_eq!(op.to_string(), "O4 (d=7, j=1, M=0)");
    }

    #[test]
    fn test_job_endpoints() {
        let job = Job {
            id: 0,
            operations: vec![3, 4, 5],
        };
        assert_eq!(job.first(), Some(3));
        assert_eq!(job.last(), Some(5));
        assert_eq!(job.len(), 3);
        assert!(!job.is_empty());
    }
}
