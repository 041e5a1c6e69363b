//! Top-level driver.
//!
//! [`Solver::solve`] validates a [`SolverConfig`], builds one greedy
//! schedule per start and, when enabled, improves each by tabu search over
//! the block neighborhood. Starts run one after another and each owns its
//! tabu list and trace; the report keeps all of them.

mod config;
mod report;
mod runner;

pub use config::SolverConfig;
pub use report::{RunReport, SolveReport};
pub use runner::Solver;
