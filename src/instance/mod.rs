//! Problem instance: jobs, operations, machines.
//!
//! Operations live in one flat pool and are addressed by dense indices.
//! Jobs and machines hold only indices into that pool, so every
//! relationship (job-of, machine-of, queue-of) is a lookup rather than a
//! reference.
//!
//! Operation ids are assigned in job-then-position order: job 0's
//! operations come first, then job 1's, and so on. Within a job, a lower id
//! therefore always means an earlier position.

mod model;
mod types;

pub use model::{Instance, InstanceSpec};
pub use types::{Job, JobId, Machine, MachineId, Operation, OperationId};
