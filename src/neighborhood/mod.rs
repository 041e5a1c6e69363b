//! Critical-block neighborhood.
//!
//! Only swaps at the boundary of a critical block can shorten the
//! makespan, so the neighborhood is small: at most two moves per block.
//! Each move is evaluated on a fresh disjunctive graph built from the
//! shared conjunctive base; moves that close a cycle are dropped.
//!
//! # Reference
//!
//! Nowicki, E. & Smutnicki, C. (1996). "A Fast Taboo Search Algorithm for the
//! Job Shop Problem", *Management Science* 42(6), 797-813.

mod explore;
mod moves;

pub use explore::{evaluate_moves, explore, BlockNeighborhood, Candidate};
pub use moves::{block_moves, Move, MoveError};
