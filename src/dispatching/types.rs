//! Core trait for priority rules.

use super::DispatchContext;
use crate::instance::Operation;

/// A scoring rule that assigns a priority value to an eligible operation.
///
/// Rules return integer scores where **lower is higher priority**. A rule
/// that prefers large values (LPT, MWKR) negates them.
///
/// # Examples
///
/// ```
/// use u_jobshop::dispatching::{DispatchContext, PriorityRule};
/// use u_jobshop::instance::Operation;
///
/// // Prefer operations on low-numbered machines.
/// struct LowMachineFirst;
///
/// impl PriorityRule for LowMachineFirst {
///     fn name(&self) -> &str { "LowMachineFirst" }
///     fn score(&self, op: &Operation, _ctx: &DispatchContext<'_>) -> i64 {
///         op.machine as i64
///     }
/// }
/// ```
pub trait PriorityRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given operation.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, operation: &Operation, context: &DispatchContext<'_>) -> i64;
}
