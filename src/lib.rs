//! Job-shop scheduling by greedy dispatching and tabu search.
//!
//! Solves the classical Job-Shop Scheduling Problem: every job is a fixed
//! sequence of operations, every operation needs one machine for a fixed
//! time, a machine runs one operation at a time, and the goal is the
//! smallest makespan.
//!
//! - **Instance**: Flat operation pool with jobs and machines as index
//!   lists, validated on construction.
//! - **Graph**: Disjunctive-graph model. The conjunctive base is built once
//!   and shared; each schedule adds its machine edges on top.
//! - **Dispatching**: LPT, SPT, MIS and MWKR priority rules and an engine
//!   that ranks eligible operations by them.
//! - **Construct**: Greedy constructor with per-(machine, job) ground-set
//!   queues and the security condition that keeps schedules acyclic.
//! - **Schedule**: Evaluated machine sequencing with critical path,
//!   makespan, start times and critical blocks.
//! - **Neighborhood**: Block-boundary swap moves and their ranked
//!   evaluation (parallel with the `parallel` feature).
//! - **Tabu Search (TS)**: Generic tabu search with a FIFO tabu list,
//!   aspiration and stall detection.
//! - **Solver**: Configuration record and multistart driver.
//! - **Monitor**: Progress hooks; [`monitor::TracingMonitor`] forwards them
//!   to `tracing`.
//!
//! # Example
//!
//! ```
//! use u_jobshop::dispatching::DispatchRule;
//! use u_jobshop::instance::Instance;
//! use u_jobshop::solver::{Solver, SolverConfig};
//!
//! // machine lists and duration lists per job
//! let instance = Instance::from_lists(
//!     3,
//!     2,
//!     &[vec![0, 1, 0, 1, 0, 1, 0], vec![0, 1, 0], vec![0, 1]],
//!     &[vec![2, 1, 2, 2, 1, 1, 1], vec![2, 2, 1], vec![2, 2]],
//! )
//! .unwrap();
//!
//! let config = SolverConfig::default()
//!     .with_heuristic(DispatchRule::Lpt)
//!     .with_tabu_search(true)
//!     .with_seed(7);
//! let report = Solver::solve(instance, &config).unwrap();
//! assert_eq!(report.makespan(), 12);
//! ```

pub mod construct;
pub mod dispatching;
pub mod error;
pub mod graph;
pub mod instance;
pub mod monitor;
pub mod neighborhood;
pub mod schedule;
pub mod solver;
pub mod tabu;
