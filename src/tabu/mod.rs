//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses a short-term memory
//! (the tabu list) to forbid undoing recent moves, preventing cycling and
//! pushing the search out of local optima.
//!
//! The runner is generic over [`TabuProblem`]; the job-shop block
//! neighborhood implements it in [`crate::neighborhood::BlockNeighborhood`].
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Nowicki, E. & Smutnicki, C. (1996). "A Fast Taboo Search Algorithm for the
//!   Job Shop Problem", *Management Science* 42(6), 797-813.

mod config;
mod list;
mod runner;
mod types;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{Acceptance, TabuResult, TabuSearch, Termination};
pub use types::{TabuMove, TabuProblem};
