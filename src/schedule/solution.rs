use std::fmt;

use super::block::{decompose_blocks, Block};
use super::shop::JobShop;
use crate::error::SequenceError;
use crate::graph::DisjunctiveGraph;
use crate::instance::{Instance, MachineId, OperationId};

/// A feasible, evaluated machine sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    shop: JobShop,
    sequences: Vec<Vec<OperationId>>,
    critical_path: Vec<OperationId>,
    makespan: i64,
    start_times: Vec<i64>,
    blocks: Vec<Block>,
}

impl Schedule {
    /// Evaluates one operation order per machine.
    ///
    /// `sequences[m]` must list every operation assigned to machine `m`
    /// exactly once.
    ///
    /// # Errors
    /// [`SequenceError::Cycle`] when the sequencing contradicts job order;
    /// the other [`SequenceError`] variants when `sequences` is not one
    /// permutation per machine of that machine's operations.
    pub fn evaluate(shop: &JobShop, sequences: Vec<Vec<OperationId>>) -> Result<Self, SequenceError> {
        check_sequences(shop.instance(), &sequences)?;

        let path = shop.graph(&sequences).critical_path()?;
        let blocks = decompose_blocks(&path.operations, shop.instance());

        Ok(Self {
            shop: shop.clone(),
            sequences,
            critical_path: path.operations,
            makespan: path.makespan,
            start_times: path.start_times,
            blocks,
        })
    }

    pub fn shop(&self) -> &JobShop {
        &self.shop
    }

    pub fn instance(&self) -> &Instance {
        self.shop.instance()
    }

    /// Operation order of every machine.
    pub fn sequences(&self) -> &[Vec<OperationId>] {
        &self.sequences
    }

    /// Operation order of one machine.
    pub fn sequence(&self, machine: MachineId) -> &[OperationId] {
        &self.sequences[machine]
    }

    /// Index of `op` within its machine's sequence.
    pub fn position(&self, op: OperationId) -> Option<usize> {
        let machine = self.instance().operation(op).machine;
        self.sequences[machine].iter().position(|&o| o == op)
    }

    /// Operations on the longest source → sink path.
    pub fn critical_path(&self) -> &[OperationId] {
        &self.critical_path
    }

    pub fn makespan(&self) -> i64 {
        self.makespan
    }

    /// Earliest start time of every operation, indexed by id.
    pub fn start_times(&self) -> &[i64] {
        &self.start_times
    }

    pub fn start_time(&self, op: OperationId) -> i64 {
        self.start_times[op]
    }

    pub fn completion_time(&self, op: OperationId) -> i64 {
        self.start_times[op] + self.instance().operation(op).duration
    }

    /// Block decomposition of the critical path.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Critical-path operations covered by `block`.
    pub fn block_operations(&self, block: &Block) -> &[OperationId] {
        &self.critical_path[block.range.clone()]
    }

    /// Rebuilds the full disjunctive graph of this schedule.
    pub fn graph(&self) -> DisjunctiveGraph {
        self.shop.graph(&self.sequences)
    }

    /// Plain-data snapshot for reporting.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            sequences: self.sequences.clone(),
            critical_path: self.critical_path.clone(),
            makespan: self.makespan,
            start_times: self.start_times.clone(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (machine, sequence) in self.sequences.iter().enumerate() {
            writeln!(f, "M{machine}: {sequence:?}")?;
        }
        writeln!(f, "critical path: {:?}", self.critical_path)?;
        write!(f, "makespan: {}", self.makespan)
    }
}

fn check_sequences(instance: &Instance, sequences: &[Vec<OperationId>]) -> Result<(), SequenceError> {
    if sequences.len() != instance.machine_count() {
        return Err(SequenceError::MachineCountMismatch {
            expected: instance.machine_count(),
            found: sequences.len(),
        });
    }

    let operation_count = instance.operation_count();
    let mut seen = vec![false; operation_count];
    for (machine, sequence) in sequences.iter().enumerate() {
        for &operation in sequence {
            if operation >= operation_count {
                return Err(SequenceError::OperationOutOfRange {
                    machine,
                    operation,
                    operation_count,
                });
            }
            let expected = instance.operation(operation).machine;
            if expected != machine {
                return Err(SequenceError::WrongMachine {
                    operation,
                    machine,
                    expected,
                });
            }
            if std::mem::replace(&mut seen[operation], true) {
                return Err(SequenceError::Duplicate { operation });
            }
        }

        let expected = instance.machine(machine).operations.len();
        if sequence.len() != expected {
            return Err(SequenceError::Incomplete {
                machine,
                expected,
                found: sequence.len(),
            });
        }
    }
    Ok(())
}

/// Serializable view of a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleSummary {
    pub sequences: Vec<Vec<OperationId>>,
    pub critical_path: Vec<OperationId>,
    pub makespan: i64,
    pub start_times: Vec<i64>,
}
