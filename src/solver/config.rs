//! Solver configuration.

use crate::dispatching::{DispatchRule, Heuristic};
use crate::tabu::TabuConfig;

/// Everything a solve needs besides the instance.
///
/// Defaults: random rule per round, no tabu search, one start, tabu list
/// of 2, 5 iterations, stall window of 3.
///
/// # Examples
///
/// ```
/// use u_jobshop::dispatching::DispatchRule;
/// use u_jobshop::solver::SolverConfig;
/// use u_jobshop::tabu::TabuConfig;
///
/// let config = SolverConfig::default()
///     .with_heuristic(DispatchRule::Mwkr)
///     .with_tabu_search(true)
///     .with_tabu(TabuConfig::default().with_max_iterations(50))
///     .with_multistart(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.start_plan().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Dispatch rule used by the greedy constructor.
    pub heuristic: Heuristic,
    /// Improve each start by tabu search; otherwise report the greedy
    /// schedules as they are.
    pub tabu_search: bool,
    pub tabu: TabuConfig,
    /// Number of starts; 0 means one start per dispatch rule.
    pub multistart: usize,
    /// Base random seed (None for an OS-seeded run).
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Auto,
            tabu_search: false,
            tabu: TabuConfig::default(),
            multistart: 1,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the construction heuristic.
    pub fn with_heuristic(mut self, heuristic: impl Into<Heuristic>) -> Self {
        self.heuristic = heuristic.into();
        self
    }

    /// Enables or disables tabu search.
    pub fn with_tabu_search(mut self, enabled: bool) -> Self {
        self.tabu_search = enabled;
        self
    }

    /// Sets the tabu search parameters.
    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    /// Sets the number of starts (0 = one per dispatch rule).
    pub fn with_multistart(mut self, starts: usize) -> Self {
        self.multistart = starts;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The heuristic of every start, in start order.
    pub fn start_plan(&self) -> Vec<Heuristic> {
        match self.multistart {
            0 => DispatchRule::ALL.into_iter().map(Heuristic::Fixed).collect(),
            n => vec![self.heuristic; n],
        }
    }

    /// Validates the configuration, returning an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tabu_search {
            self.tabu.validate()?;
        }
        Ok(())
    }
}
