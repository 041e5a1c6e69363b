//! Critical-path blocks.

use std::ops::Range;

use crate::instance::{Instance, MachineId, OperationId};

/// A maximal run of consecutive critical-path operations on one machine.
///
/// `range` indexes into the critical path the block was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub machine: MachineId,
    pub range: Range<usize>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Splits a critical path into blocks with one linear scan.
pub fn decompose_blocks(path: &[OperationId], instance: &Instance) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for end in 1..=path.len() {
        let machine = instance.operation(path[start]).machine;
        if end == path.len() || instance.operation(path[end]).machine != machine {
            blocks.push(Block {
                machine,
                range: start..end,
            });
            start = end;
        }
    }

    blocks
}
