//! Error taxonomy.
//!
//! Only two kinds of failure abort a run: a malformed instance (rejected
//! before construction starts) and an internal construction defect. An
//! inadmissible neighbor during search, or a search step with no acceptable
//! move, are ordinary outcomes and never abort a run. [`SequenceError`]
//! describes sequences that cannot be evaluated as a schedule; the
//! neighborhood drops such neighbors.

use thiserror::Error;

use crate::graph::CycleDetected;
use crate::instance::{MachineId, OperationId};

/// Reasons an instance description is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The instance declares zero machines.
    #[error("instance has no machines")]
    NoMachines,

    /// The instance declares zero jobs.
    #[error("instance has no jobs")]
    NoJobs,

    /// The declared job count does not match the supplied job lists.
    #[error("expected {expected} jobs, found {found} machine lists and {durations} duration lists")]
    JobCountMismatch {
        expected: usize,
        found: usize,
        durations: usize,
    },

    /// A job's machine list and duration list differ in length.
    #[error("job {job}: {machines} machine entries but {durations} durations")]
    LengthMismatch {
        job: usize,
        machines: usize,
        durations: usize,
    },

    /// A job has no operations.
    #[error("job {job} has no operations")]
    EmptyJob { job: usize },

    /// An operation references a machine outside `0..machine_count`.
    #[error("job {job}, operation {position}: machine {machine} out of range 0..{machine_count}")]
    MachineOutOfRange {
        job: usize,
        position: usize,
        machine: MachineId,
        machine_count: usize,
    },

    /// An operation has a zero or negative duration.
    #[error("job {job}, operation {position}: duration must be positive, got {duration}")]
    NonPositiveDuration {
        job: usize,
        position: usize,
        duration: i64,
    },
}

/// Reasons a set of machine sequences cannot be evaluated as a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// One sequence per machine is required.
    #[error("expected {expected} machine sequences, found {found}")]
    MachineCountMismatch { expected: usize, found: usize },

    /// A sequence names an operation id outside `0..operation_count`.
    #[error("machine {machine}: operation {operation} out of range 0..{operation_count}")]
    OperationOutOfRange {
        machine: MachineId,
        operation: OperationId,
        operation_count: usize,
    },

    /// An operation sits in the sequence of a machine it does not run on.
    #[error("operation {operation} runs on machine {expected} but is sequenced on machine {machine}")]
    WrongMachine {
        operation: OperationId,
        machine: MachineId,
        expected: MachineId,
    },

    /// An operation appears more than once.
    #[error("operation {operation} is sequenced more than once")]
    Duplicate { operation: OperationId },

    /// A machine sequence leaves some of its operations out.
    #[error("machine {machine}: {found} of {expected} operations sequenced")]
    Incomplete {
        machine: MachineId,
        expected: usize,
        found: usize,
    },

    /// The sequencing contradicts job order.
    #[error(transparent)]
    Cycle(#[from] CycleDetected),
}

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobShopError {
    /// The instance failed validation.
    #[error("malformed instance: {0}")]
    MalformedInstance(#[from] InstanceError),

    /// The greedy constructor produced a cyclic machine sequencing.
    ///
    /// The security condition makes this impossible; seeing it means the
    /// constructor is broken.
    #[error("greedy construction produced an inadmissible schedule: operation {blocked} is blocked by a precedence cycle")]
    InadmissibleConstruction { blocked: OperationId },

    /// The greedy constructor produced sequences that do not cover the
    /// instance.
    #[error("greedy construction produced malformed sequences: {0}")]
    MalformedConstruction(SequenceError),

    /// A construction round placed nothing while operations were pending.
    #[error("greedy construction stalled in round {round} with {remaining} operations unplaced")]
    ConstructionStalled { round: usize, remaining: usize },

    /// A configuration record failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
