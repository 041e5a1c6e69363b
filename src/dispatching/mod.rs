//! Dispatching rules and the rule engine used by greedy construction.
//!
//! At each construction step a machine has a handful of eligible
//! operations. A [`RuleEngine`] ranks them by one or more
//! [`PriorityRule`]s; the four classic rules are provided by
//! [`DispatchRule`], and [`Heuristic`] chooses between a fixed rule and a
//! seeded random draw per round.
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod context;
mod engine;
mod rules;
mod types;

pub use context::DispatchContext;
pub use engine::RuleEngine;
pub use rules::{DispatchRule, Heuristic, ParseRuleError};
pub use types::PriorityRule;
