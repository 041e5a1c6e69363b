//! Validated instance and its plain-data description.

use super::types::{Job, JobId, Machine, MachineId, Operation, OperationId};
use crate::error::InstanceError;

/// Plain-data instance description, as handed over by a loader.
///
/// Each job is an ordered list of `(machine, duration)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceSpec {
    pub machine_count: usize,
    pub jobs: Vec<Vec<(MachineId, i64)>>,
}

/// A validated job-shop instance.
///
/// # Examples
///
/// ```
/// use u_jobshop::instance::Instance;
///
/// let instance = Instance::new(2, &[
///     vec![(0, 3), (1, 2)],
///     vec![(1, 4), (0, 1)],
/// ]).unwrap();
///
/// assert_eq!(instance.operation_count(), 4);
/// assert_eq!(instance.machine(1).operations, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "InstanceSpec", into = "InstanceSpec")
)]
pub struct Instance {
    operations: Vec<Operation>,
    jobs: Vec<Job>,
    machines: Vec<Machine>,
}

impl Instance {
    /// Builds an instance from per-job `(machine, duration)` lists.
    ///
    /// # Errors
    /// Returns an [`InstanceError`] for zero machines, zero jobs, an empty
    /// job, a machine id outside `0..machine_count`, or a non-positive
    /// duration.
    pub fn new(machine_count: usize, jobs: &[Vec<(MachineId, i64)>]) -> Result<Self, InstanceError> {
        if machine_count == 0 {
            return Err(InstanceError::NoMachines);
        }
        if jobs.is_empty() {
            return Err(InstanceError::NoJobs);
        }

        let mut operations = Vec::with_capacity(jobs.iter().map(Vec::len).sum());
        let mut job_records = Vec::with_capacity(jobs.len());

        for (job, steps) in jobs.iter().enumerate() {
            if steps.is_empty() {
                return Err(InstanceError::EmptyJob { job });
            }

            let mut ids = Vec::with_capacity(steps.len());
            for (position, &(machine, duration)) in steps.iter().enumerate() {
                if machine >= machine_count {
                    return Err(InstanceError::MachineOutOfRange {
                        job,
                        position,
                        machine,
                        machine_count,
                    });
                }
                if duration <= 0 {
                    return Err(InstanceError::NonPositiveDuration {
                        job,
                        position,
                        duration,
                    });
                }

                let id = operations.len();
                operations.push(Operation {
                    id,
                    job,
                    position,
                    machine,
                    duration,
                });
                ids.push(id);
            }

            job_records.push(Job {
                id: job,
                operations: ids,
            });
        }

        let mut machines: Vec<Machine> = (0..machine_count)
            .map(|id| Machine {
                id,
                operations: Vec::new(),
            })
            .collect();
        for op in &operations {
            machines[op.machine].operations.push(op.id);
        }

        Ok(Self {
            operations,
            jobs: job_records,
            machines,
        })
    }

    /// Builds an instance from parallel machine and duration lists.
    ///
    /// This is the shape a typical loader produces: `machine_lists[j][i]` is
    /// the machine of operation `i` of job `j`, `duration_lists[j][i]` its
    /// duration.
    ///
    /// # Errors
    /// In addition to the checks of [`Instance::new`], rejects a job count
    /// that disagrees with the list lengths and per-job length mismatches.
    pub fn from_lists(
        job_count: usize,
        machine_count: usize,
        machine_lists: &[Vec<MachineId>],
        duration_lists: &[Vec<i64>],
    ) -> Result<Self, InstanceError> {
        if machine_lists.len() != job_count || duration_lists.len() != job_count {
            return Err(InstanceError::JobCountMismatch {
                expected: job_count,
                found: machine_lists.len(),
                durations: duration_lists.len(),
            });
        }

        let mut jobs: Vec<Vec<(MachineId, i64)>> = Vec::with_capacity(job_count);
        for (job, (machines, durations)) in machine_lists.iter().zip(duration_lists).enumerate() {
            if machines.len() != durations.len() {
                return Err(InstanceError::LengthMismatch {
                    job,
                    machines: machines.len(),
                    durations: durations.len(),
                });
            }
            jobs.push(machines.iter().copied().zip(durations.iter().copied()).collect());
        }

        Self::new(machine_count, &jobs)
    }

    /// All operations, indexed by id.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The operation with the given id.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    pub fn operation(&self, id: OperationId) -> &Operation {
        &self.operations[id]
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: JobId) -> &Job {
        &self.jobs[id]
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn machine(&self, id: MachineId) -> &Machine {
        &self.machines[id]
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Operations of the same job that come after `id`, in job order.
    pub fn successors(&self, id: OperationId) -> &[OperationId] {
        let op = &self.operations[id];
        &self.jobs[op.job].operations[op.position + 1..]
    }

    /// A lower bound on the makespan: the larger of the heaviest machine
    /// load and the longest job.
    pub fn lower_bound(&self) -> i64 {
        let machine_bound = self
            .machines
            .iter()
            .map(|m| m.load(&self.operations))
            .max()
            .unwrap_or(0);
        let job_bound = self
            .jobs
            .iter()
            .map(|j| j.operations.iter().map(|&op| self.operations[op].duration).sum::<i64>())
            .max()
            .unwrap_or(0);
        machine_bound.max(job_bound)
    }
}

impl TryFrom<InstanceSpec> for Instance {
    type Error = InstanceError;

    fn try_from(spec: InstanceSpec) -> Result<Self, Self::Error> {
        Self::new(spec.machine_count, &spec.jobs)
    }
}

impl From<Instance> for InstanceSpec {
    fn from(instance: Instance) -> Self {
        let jobs = instance
            .jobs
            .iter()
            .map(|job| {
                job.operations
                    .iter()
                    .map(|&op| {
                        let op = &instance.operations[op];
                        (op.machine, op.duration)
                    })
                    .collect()
            })
            .collect();
        Self {
            machine_count: instance.machines.len(),
            jobs,
        }
    }
}
