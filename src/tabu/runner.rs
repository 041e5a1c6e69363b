//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given solution with an empty tabu list
//! 2. At each iteration:
//!    a. Generate the neighborhood and rank it by ascending cost
//!    b. Accept the first neighbor that beats the best cost (aspiration),
//!       or failing that the first one whose move is not tabu
//!    c. A non-aspirated move pushes its inverse onto the tabu list
//!    d. Update the best solution if improved
//! 3. Terminate after `max_iterations`, on a stall, or when no neighbor is
//!    acceptable
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::list::TabuList;
use super::types::TabuProblem;
use crate::monitor::{IterationEvent, SearchMonitor, SearchSummary};

/// Why a neighbor was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// The neighbor beat the best cost so far; tabu status was ignored.
    Aspiration,
    /// The neighbor's move was not tabu.
    NonTabu,
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The iteration budget was spent.
    MaxIterations,
    /// The trailing window of incumbent costs never decreased.
    Stalled,
    /// Every neighbor was tabu without aspiration, or there were none.
    NoAdmissibleMove,
}

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: i64,
    /// Accepted moves.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = the start).
    pub best_iteration: usize,
    /// Incumbent cost after every iteration, starting with the initial cost.
    pub cost_history: Vec<i64>,
    /// Best cost after every iteration, starting with the initial cost.
    pub best_cost_history: Vec<i64>,
    pub termination: Termination,
}

/// Tabu search runner.
pub struct TabuSearch;

impl TabuSearch {
    /// Improves `initial` by tabu search.
    ///
    /// Deterministic: the same problem, start and configuration always
    /// yield the same trajectory.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_jobshop::monitor::NoOpMonitor;
    /// use u_jobshop::tabu::{TabuConfig, TabuMove, TabuProblem, TabuSearch};
    ///
    /// struct Line;
    /// impl TabuProblem for Line {
    ///     type Solution = i64;
    ///     type Key = i64;
    ///     fn cost(&self, x: &i64) -> i64 { (x - 3).abs() }
    ///     fn neighbors(&self, x: &i64) -> Vec<TabuMove<i64, i64>> {
    ///         [-1, 1]
    ///             .into_iter()
    ///             .map(|d| TabuMove { solution: x + d, key: d, cost: self.cost(&(x + d)) })
    ///             .collect()
    ///     }
    ///     fn inverse(&self, d: &i64) -> i64 { -d }
    /// }
    ///
    /// let config = TabuConfig::default().with_max_iterations(10);
    /// let result = TabuSearch::run(&Line, 0, &config, &mut NoOpMonitor);
    /// assert_eq!(result.best, 3);
    /// ```
    pub fn run<P, M>(
        problem: &P,
        initial: P::Solution,
        config: &TabuConfig,
        monitor: &mut M,
    ) -> TabuResult<P::Solution>
    where
        P: TabuProblem,
        M: SearchMonitor,
    {
        let initial_cost = problem.cost(&initial);
        monitor.on_enter_search(initial_cost);

        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = initial_cost;
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_list_size);
        let mut cost_history = vec![initial_cost];
        let mut best_cost_history = vec![initial_cost];
        let mut iterations = 0;

        let termination = loop {
            if iterations >= config.max_iterations {
                break Termination::MaxIterations;
            }
            if is_stalled(&cost_history, config.stall_window) {
                break Termination::Stalled;
            }

            let mut neighbors = problem.neighbors(&current);
            neighbors.sort_by_key(|mv| mv.cost);
            let candidates = neighbors.len();

            let mut skipped = 0;
            let mut accepted = None;
            for mv in neighbors {
                if config.aspiration && mv.cost < best_cost {
                    accepted = Some((mv, Acceptance::Aspiration));
                    break;
                }
                if !tabu.contains(&mv.key) {
                    accepted = Some((mv, Acceptance::NonTabu));
                    break;
                }
                skipped += 1;
            }

            let Some((mv, acceptance)) = accepted else {
                break Termination::NoAdmissibleMove;
            };

            if acceptance == Acceptance::NonTabu {
                tabu.push(problem.inverse(&mv.key));
            }
            iterations += 1;

            if mv.cost < best_cost {
                best = mv.solution.clone();
                best_cost = mv.cost;
                best_iteration = iterations;
            }
            cost_history.push(mv.cost);
            best_cost_history.push(best_cost);

            monitor.on_iteration(&IterationEvent {
                iteration: iterations,
                acceptance,
                key: &mv.key,
                current_cost: mv.cost,
                best_cost,
                candidates,
                skipped,
                tabu_len: tabu.len(),
            });

            current = mv.solution;
        };

        monitor.on_exit_search(&SearchSummary {
            termination,
            iterations,
            best_cost,
            best_iteration,
        });

        TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cost_history,
            best_cost_history,
            termination,
        }
    }
}

/// True once the trace holds more than `window + 1` costs and its last
/// `window` entries never decrease.
pub(crate) fn is_stalled(history: &[i64], window: usize) -> bool {
    if history.len() <= window + 1 {
        return false;
    }
    history[history.len() - window..]
        .windows(2)
        .all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::GreedyConstructor;
    use crate::dispatching::DispatchRule;
    use crate::instance::Instance;
    use crate::monitor::NoOpMonitor;
    use crate::neighborhood::BlockNeighborhood;
    use crate::schedule::{JobShop, Schedule};
    use crate::tabu::TabuMove;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    // ---- Quadratic minimization: f(x) = (x - 5)^2, minimum at x = 5 ----

    struct DiscretizedQuadratic;

    impl TabuProblem for DiscretizedQuadratic {
        type Solution = i64;
        type Key = (i64, i64);

        fn cost(&self, &x: &i64) -> i64 {
            (x - 5) * (x - 5)
        }

        fn neighbors(&self, &x: &i64) -> Vec<TabuMove<i64, (i64, i64)>> {
            [x - 1, x + 1]
                .into_iter()
                .map(|to| TabuMove {
                    solution: to,
                    key: (x, to),
                    cost: self.cost(&to),
                })
                .collect()
        }

        fn inverse(&self, &(from, to): &(i64, i64)) -> (i64, i64) {
            (to, from)
        }
    }

    #[test]
    fn test_tabu_quadratic_finds_optimum() {
        let config = TabuConfig::default().with_max_iterations(200);
        let result = TabuSearch::run(&DiscretizedQuadratic, 0, &config, &mut NoOpMonitor);

        assert_eq!(result.best, 5, "expected optimum at x=5, got {}", result.best);
        assert_eq!(result.best_cost, 0);
        assert_eq!(result.best_iteration, 5);

        // 0 → 5 by aspiration, then 4 and 3 are forced uphill: [0, 1, 4] stalls.
        assert_eq!(result.termination, Termination::Stalled);
        assert_eq!(result.iterations, 7);
        assert_eq!(result.cost_history, vec![25, 16, 9, 4, 1, 0, 1, 4]);
    }

    #[test]
    fn test_tabu_max_iterations() {
        let config = TabuConfig::default().with_max_iterations(3);
        let result = TabuSearch::run(&DiscretizedQuadratic, 0, &config, &mut NoOpMonitor);

        assert_eq!(result.termination, Termination::MaxIterations);
        assert_eq!(result.iterations, 3);
        assert_eq!(result.best, 3);
        assert_eq!(result.cost_history.len(), 4);
    }

    #[test]
    fn test_tabu_best_history_non_increasing() {
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_stall_window(20);
        let result = TabuSearch::run(&DiscretizedQuadratic, -20, &config, &mut NoOpMonitor);

        assert_eq!(result.best_cost_history.len(), result.iterations + 1);
        for window in result.best_cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(*result.best_cost_history.last().unwrap(), result.best_cost);
    }

    #[test]
    fn test_job_shop_best_never_worsens() {
        let config = TabuConfig::default()
            .with_tabu_list_size(4)
            .with_max_iterations(50)
            .with_stall_window(10);

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (jobs, machines) = (rng.random_range(2..6), rng.random_range(1..5));
            let lists: Vec<Vec<(usize, i64)>> = (0..jobs)
                .map(|_| {
                    let mut route: Vec<usize> = (0..machines).collect();
                    route.shuffle(&mut rng);
                    route
                        .into_iter()
                        .map(|machine| (machine, rng.random_range(1..20)))
                        .collect()
                })
                .collect();
            let shop = JobShop::new(Instance::new(machines, &lists).unwrap());
            let initial =
                GreedyConstructor::construct(&shop, DispatchRule::Mwkr.into(), &mut rng, &mut NoOpMonitor)
                    .unwrap();

            let result = TabuSearch::run(&BlockNeighborhood, initial, &config, &mut NoOpMonitor);

            assert!(result.best_cost_history.windows(2).all(|w| w[1] <= w[0]), "seed {seed}");
            assert_eq!(result.best_cost, result.best.makespan());
            assert!(result.best.graph().is_acyclic());
            let again = Schedule::evaluate(&shop, result.best.sequences().to_vec()).unwrap();
            assert_eq!(again.makespan(), result.best_cost);
        }
    }

    #[test]
    fn test_tabu_best_iteration_recorded() {
        let config = TabuConfig::default().with_max_iterations(100);
        let result = TabuSearch::run(&DiscretizedQuadratic, 9, &config, &mut NoOpMonitor);

        assert!(
            result.best_iteration <= result.iterations,
            "best_iteration {} should be <= total iterations {}",
            result.best_iteration,
            result.iterations
        );
        assert_eq!(result.cost_history[result.best_iteration], result.best_cost);
    }

    // ---- Permutation sorting with swap neighborhoods ----

    struct PermSortTabu;

    fn misplaced(perm: &[usize]) -> i64 {
        perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as i64
    }

    impl TabuProblem for PermSortTabu {
        type Solution = Vec<usize>;
        type Key = (usize, usize);

        fn cost(&self, perm: &Vec<usize>) -> i64 {
            misplaced(perm)
        }

        fn neighbors(&self, perm: &Vec<usize>) -> Vec<TabuMove<Vec<usize>, (usize, usize)>> {
            let n = perm.len();
            let mut moves = Vec::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    let mut new_perm = perm.clone();
                    new_perm.swap(i, j);
                    let cost = misplaced(&new_perm);
                    moves.push(TabuMove {
                        solution: new_perm,
                        key: (i, j),
                        cost,
                    });
                }
            }
            moves
        }

        fn inverse(&self, key: &(usize, usize)) -> (usize, usize) {
            *key
        }
    }

    #[test]
    fn test_tabu_permutation_sort() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm: Vec<usize> = (0..8).collect();
        perm.shuffle(&mut rng);

        let config = TabuConfig::default()
            .with_max_iterations(500)
            .with_tabu_list_size(5)
            .with_stall_window(50);
        let result = TabuSearch::run(&PermSortTabu, perm, &config, &mut NoOpMonitor);

        assert_eq!(result.best_cost, 0, "expected sorted permutation");
        assert_eq!(result.best, (0..8).collect::<Vec<_>>());
    }

    // ---- Every move shares one key: only aspiration escapes the list ----

    struct CoarseKeys;

    impl TabuProblem for CoarseKeys {
        type Solution = i64;
        type Key = u8;

        fn cost(&self, &x: &i64) -> i64 {
            (x - 5) * (x - 5)
        }

        fn neighbors(&self, &x: &i64) -> Vec<TabuMove<i64, u8>> {
            [x - 1, x + 1]
                .into_iter()
                .map(|to| TabuMove {
                    solution: to,
                    key: 0,
                    cost: self.cost(&to),
                })
                .collect()
        }

        fn inverse(&self, key: &u8) -> u8 {
            *key
        }
    }

    #[test]
    fn test_tabu_aspiration_criterion() {
        let config = TabuConfig::default().with_max_iterations(50);
        let with_aspiration = TabuSearch::run(&CoarseKeys, 0, &config, &mut NoOpMonitor);
        assert_eq!(with_aspiration.best, 5);
        assert_eq!(with_aspiration.iterations, 6);
        assert_eq!(with_aspiration.termination, Termination::NoAdmissibleMove);

        let config = config.with_aspiration(false);
        let without = TabuSearch::run(&CoarseKeys, 0, &config, &mut NoOpMonitor);
        assert_eq!(without.best, 1);
        assert_eq!(without.iterations, 1);
        assert_eq!(without.termination, Termination::NoAdmissibleMove);
    }

    #[test]
    fn test_tabu_empty_neighborhood() {
        struct EmptyNeighborhood;

        impl TabuProblem for EmptyNeighborhood {
            type Solution = i64;
            type Key = ();

            fn cost(&self, &x: &i64) -> i64 {
                x
            }

            fn neighbors(&self, _sol: &i64) -> Vec<TabuMove<i64, ()>> {
                vec![]
            }

            fn inverse(&self, _key: &()) {}
        }

        let result = TabuSearch::run(&EmptyNeighborhood, 7, &TabuConfig::default(), &mut NoOpMonitor);

        assert_eq!(result.best, 7);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history, vec![7]);
        assert_eq!(result.termination, Termination::NoAdmissibleMove);
    }

    #[derive(Default)]
    struct Recorder {
        entered: Option<i64>,
        steps: Vec<(usize, Acceptance, i64, usize)>,
        summary: Option<SearchSummary>,
    }

    impl SearchMonitor for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn on_enter_search(&mut self, initial_cost: i64) {
            self.entered = Some(initial_cost);
        }

        fn on_iteration(&mut self, event: &IterationEvent<'_>) {
            self.steps
                .push((event.iteration, event.acceptance, event.current_cost, event.skipped));
        }

        fn on_exit_search(&mut self, summary: &SearchSummary) {
            self.summary = Some(*summary);
        }
    }

    #[test]
    fn test_tabu_reports_to_monitor() {
        let mut recorder = Recorder::default();
        let config = TabuConfig::default().with_max_iterations(200);
        let result = TabuSearch::run(&DiscretizedQuadratic, 3, &config, &mut recorder);

        assert_eq!(recorder.entered, Some(4));
        assert_eq!(recorder.steps.len(), result.iterations);
        assert_eq!(recorder.steps[0], (1, Acceptance::Aspiration, 1, 0));
        assert_eq!(recorder.steps[1], (2, Acceptance::Aspiration, 0, 0));
        // From 5 the search must go uphill without aspiration.
        assert_eq!(recorder.steps[2].1, Acceptance::NonTabu);

        let summary = recorder.summary.unwrap();
        assert_eq!(summary.iterations, result.iterations);
        assert_eq!(summary.best_cost, 0);
        assert_eq!(summary.termination, result.termination);
    }

    #[test]
    fn test_stall_rule() {
        assert!(!is_stalled(&[5, 5, 5, 5], 3));
        assert!(is_stalled(&[5, 5, 5, 5, 5], 3));
        assert!(is_stalled(&[9, 1, 2, 3], 2));
        assert!(!is_stalled(&[9, 1, 3, 2], 2));
        assert!(!is_stalled(&[9, 8, 7, 6, 5], 3));
    }
}
