use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::SolverConfig;
use super::report::{RunReport, SolveReport};
use crate::construct::GreedyConstructor;
use crate::error::JobShopError;
use crate::instance::Instance;
use crate::monitor::{SearchMonitor, TracingMonitor};
use crate::neighborhood::BlockNeighborhood;
use crate::schedule::JobShop;
use crate::tabu::TabuSearch;

/// Greedy construction followed, optionally, by tabu search, from one or
/// more starts.
pub struct Solver;

impl Solver {
    /// Solves `instance`, reporting progress through `tracing`.
    ///
    /// # Errors
    /// [`JobShopError::InvalidConfig`] if `config` fails validation; the
    /// construction errors of [`GreedyConstructor::construct`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_jobshop::dispatching::DispatchRule;
    /// use u_jobshop::instance::Instance;
    /// use u_jobshop::solver::{Solver, SolverConfig};
    ///
    /// let instance = Instance::new(2, &[vec![(0, 3), (1, 2)], vec![(1, 4), (0, 1)]]).unwrap();
    /// let config = SolverConfig::default()
    ///     .with_heuristic(DispatchRule::Lpt)
    ///     .with_tabu_search(true)
    ///     .with_seed(1);
    ///
    /// let report = Solver::solve(instance, &config).unwrap();
    /// assert_eq!(report.makespan(), 6);
    /// ```
    #[tracing::instrument(
        skip_all,
        fields(
            jobs = instance.job_count(),
            machines = instance.machine_count(),
            operations = instance.operation_count()
        )
    )]
    pub fn solve(instance: Instance, config: &SolverConfig) -> Result<SolveReport, JobShopError> {
        Self::solve_with_monitor(instance, config, &mut TracingMonitor)
    }

    /// Solves `instance`, reporting progress to `monitor`.
    ///
    /// Every start gets its own RNG seeded from the base seed and the start
    /// index, so a seeded solve is reproducible start by start.
    pub fn solve_with_monitor<M: SearchMonitor>(
        instance: Instance,
        config: &SolverConfig,
        monitor: &mut M,
    ) -> Result<SolveReport, JobShopError> {
        config.validate().map_err(JobShopError::InvalidConfig)?;

        let shop = JobShop::new(instance);
        let base_seed = config.seed.unwrap_or_else(rand::random);
        let mut runs = Vec::new();

        for (start, heuristic) in config.start_plan().into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(start_seed(base_seed, start));
            let initial = GreedyConstructor::construct(&shop, heuristic, &mut rng, monitor)?;
            tracing::debug!(start, %heuristic, makespan = initial.makespan(), "greedy start built");

            let run = if config.tabu_search {
                let result = TabuSearch::run(&BlockNeighborhood, initial.clone(), &config.tabu, monitor);
                RunReport {
                    start,
                    heuristic,
                    rule: heuristic.fixed(),
                    initial,
                    best: result.best,
                    iterations: result.iterations,
                    best_iteration: result.best_iteration,
                    history: result.cost_history,
                    termination: Some(result.termination),
                }
            } else {
                RunReport {
                    start,
                    heuristic,
                    rule: heuristic.fixed(),
                    history: vec![initial.makespan()],
                    best: initial.clone(),
                    initial,
                    iterations: 0,
                    best_iteration: 0,
                    termination: None,
                }
            };
            runs.push(run);
        }

        let report = SolveReport::new(runs);
        tracing::info!(
            starts = report.runs.len(),
            best_run = report.best_run,
            makespan = report.makespan(),
            "solve finished"
        );
        Ok(report)
    }
}

fn start_seed(base: u64, start: usize) -> u64 {
    base ^ (start as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::{DispatchRule, Heuristic};
    use crate::monitor::NoOpMonitor;
    use crate::tabu::{TabuConfig, Termination};

    fn toy() -> Instance {
        Instance::from_lists(
            3,
            2,
            &[vec![0, 1, 0, 1, 0, 1, 0], vec![0, 1, 0], vec![0, 1]],
            &[vec![2, 1, 2, 2, 1, 1, 1], vec![2, 2, 1], vec![2, 2]],
        )
        .unwrap()
    }

    fn solve(config: &SolverConfig) -> SolveReport {
        Solver::solve_with_monitor(toy(), config, &mut NoOpMonitor).unwrap()
    }

    #[test]
    fn test_greedy_only() {
        let report = solve(&SolverConfig::default().with_heuristic(DispatchRule::Lpt).with_seed(7));

        assert_eq!(report.runs.len(), 1);
        let run = report.best();
        assert_eq!(run.rule, Some(DispatchRule::Lpt));
        assert_eq!(run.iterations, 0);
        assert_eq!(run.history, vec![14]);
        assert_eq!(run.termination, None);
        assert_eq!(run.best, run.initial);
        assert_eq!(report.makespan(), 14);
    }

    #[test]
    fn test_tabu_improves_lpt_start() {
        let config = SolverConfig::default()
            .with_heuristic(DispatchRule::Lpt)
            .with_tabu_search(true)
            .with_seed(7);
        let report = solve(&config);
        let run = report.best();

        assert_eq!(run.initial.makespan(), 14);
        assert_eq!(run.makespan(), 12);
        assert_eq!(run.improvement(), 2);
        assert_eq!(run.history, vec![14, 13, 12, 12, 13]);
        assert_eq!(run.iterations, 4);
        assert_eq!(run.best_iteration, 2);
        assert_eq!(run.termination, Some(Termination::Stalled));
        assert_eq!(
            run.best.sequences(),
            &[vec![0, 2, 7, 4, 10, 6, 9], vec![1, 3, 8, 5, 11]]
        );
    }

    #[test]
    fn test_tabu_respects_iteration_budget() {
        let config = SolverConfig::default()
            .with_heuristic(DispatchRule::Spt)
            .with_tabu_search(true)
            .with_seed(7);
        let run = solve(&config).runs.remove(0);

        assert_eq!(run.history, vec![19, 16, 15, 14, 13, 12]);
        assert_eq!(run.termination, Some(Termination::MaxIterations));
    }

    #[test]
    fn test_multistart_zero_runs_every_rule() {
        let report = solve(&SolverConfig::default().with_multistart(0).with_seed(3));

        let rules: Vec<_> = report.runs.iter().map(|run| run.rule).collect();
        assert_eq!(rules, DispatchRule::ALL.map(Some).to_vec());

        let makespans: Vec<_> = report.runs.iter().map(RunReport::makespan).collect();
        assert_eq!(makespans, vec![14, 19, 14, 12]);
        assert_eq!(report.best_run, 3);
    }

    #[test]
    fn test_multistart_ties_keep_first_run() {
        let config = SolverConfig::default()
            .with_multistart(0)
            .with_tabu_search(true)
            .with_seed(3);
        let report = solve(&config);

        assert!(report.runs.iter().all(|run| run.makespan() == 12));
        assert_eq!(report.best_run, 0);
        for run in &report.runs {
            assert_eq!(run.history.len(), run.iterations + 1);
        }
    }

    #[test]
    fn test_seeded_multistart_is_reproducible() {
        let config = SolverConfig::default()
            .with_multistart(3)
            .with_tabu_search(true)
            .with_tabu(TabuConfig::default().with_max_iterations(20))
            .with_seed(123);

        let a = solve(&config);
        let b = solve(&config);
        assert_eq!(a, b);
        assert!(a.runs.iter().all(|run| run.heuristic == Heuristic::Auto && run.rule.is_none()));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SolverConfig::default()
            .with_tabu_search(true)
            .with_tabu(TabuConfig::default().with_max_iterations(0));
        let err = Solver::solve_with_monitor(toy(), &config, &mut NoOpMonitor).unwrap_err();
        assert!(matches!(err, JobShopError::InvalidConfig(_)));
    }

    #[test]
    fn test_unseeded_solve_succeeds() {
        let report = Solver::solve(toy(), &SolverConfig::default().with_tabu_search(true)).unwrap();
        assert!(report.makespan() >= 11);
    }

    #[test]
    fn test_report_display() {
        let report = solve(&SolverConfig::default().with_heuristic(DispatchRule::Lpt).with_seed(7));
        let text = report.to_string();
        assert!(text.starts_with("start 0 (LPT): greedy 14 → best 14 after 0 iterations\n"));
        assert!(text.ends_with("makespan: 14"));
    }

    #[test]
    fn test_start_seeds_differ() {
        assert_eq!(start_seed(5, 0), 5);
        assert_ne!(start_seed(5, 1), start_seed(5, 2));
    }
}
