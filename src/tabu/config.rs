//! Tabu search configuration.

/// Configuration parameters for [`TabuSearch`](super::TabuSearch).
///
/// # Examples
///
/// ```
/// use u_jobshop::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(100)
///     .with_tabu_list_size(4);
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.tabu_list_size, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// How many inverse moves the tabu list remembers.
    pub tabu_list_size: usize,
    /// Maximum number of accepted moves.
    pub max_iterations: usize,
    /// Number of trailing incumbent costs inspected by the stall test.
    pub stall_window: usize,
    /// Accept a tabu move when it beats the best cost so far.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_list_size: 2,
            max_iterations: 5,
            stall_window: 3,
            aspiration: true,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = size;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stall window.
    pub fn with_stall_window(mut self, window: usize) -> Self {
        self.stall_window = window;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Validates the configuration, returning an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tabu_list_size == 0 {
            return Err("tabu_list_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.stall_window == 0 {
            return Err("stall_window must be at least 1".into());
        }
        Ok(())
    }
}
