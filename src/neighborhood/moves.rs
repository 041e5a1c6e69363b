use std::fmt;

use thiserror::Error;

use crate::error::SequenceError;
use crate::instance::OperationId;
use crate::schedule::Schedule;

/// Exchange of two operations adjacent on one machine.
///
/// `first` runs immediately before `second` in the incumbent; applying the
/// move makes `second` run immediately before `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub first: OperationId,
    pub second: OperationId,
}

/// Why a move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("operations {first} and {second} are not adjacent on one machine")]
    NotAdjacent {
        first: OperationId,
        second: OperationId,
    },

    #[error("move produces an infeasible sequencing: {0}")]
    Inadmissible(#[from] SequenceError),
}

impl Move {
    pub fn new(first: OperationId, second: OperationId) -> Self {
        Self { first, second }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Copies `schedule`'s sequences with the two operations exchanged.
    ///
    /// # Errors
    /// [`MoveError::NotAdjacent`] unless `first` immediately precedes
    /// `second` on the same machine.
    pub fn swap_sequences(self, schedule: &Schedule) -> Result<Vec<Vec<OperationId>>, MoveError> {
        let not_adjacent = MoveError::NotAdjacent {
            first: self.first,
            second: self.second,
        };

        let instance = schedule.instance();
        if self.first >= instance.operation_count() || self.second >= instance.operation_count() {
            return Err(not_adjacent);
        }
        let machine = instance.operation(self.first).machine;
        if instance.operation(self.second).machine != machine {
            return Err(not_adjacent);
        }

        let index = match schedule.position(self.first) {
            Some(i) if schedule.sequence(machine).get(i + 1) == Some(&self.second) => i,
            _ => return Err(not_adjacent),
        };

        let mut sequences = schedule.sequences().to_vec();
        sequences[machine].swap(index, index + 1);
        Ok(sequences)
    }

    /// Applies the move and evaluates the resulting schedule.
    ///
    /// # Errors
    /// [`MoveError::NotAdjacent`] for a malformed move and
    /// [`MoveError::Inadmissible`] when the exchange closes a cycle.
    pub fn apply(self, schedule: &Schedule) -> Result<Schedule, MoveError> {
        let sequences = self.swap_sequences(schedule)?;
        Ok(Schedule::evaluate(schedule.shop(), sequences)?)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl From<(OperationId, OperationId)> for Move {
    fn from((first, second): (OperationId, OperationId)) -> Self {
        Self::new(first, second)
    }
}

/// Boundary swaps of every critical block.
///
/// A block of two yields its only pair; a longer block yields its first
/// two and its last two operations; a single operation yields nothing.
/// Moves are listed in critical-path order.
pub fn block_moves(schedule: &Schedule) -> Vec<Move> {
    let mut moves = Vec::new();
    for block in schedule.blocks() {
        let ops = schedule.block_operations(block);
        match ops.len() {
            0 | 1 => {}
            2 => moves.push(Move::new(ops[0], ops[1])),
            n => {
                moves.push(Move::new(ops[0], ops[1]));
                moves.push(Move::new(ops[n - 2], ops[n - 1]));
            }
        }
    }
    moves
}
