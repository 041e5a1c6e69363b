use std::fmt;

use crate::dispatching::{DispatchRule, Heuristic};
use crate::schedule::Schedule;
use crate::tabu::Termination;

/// Outcome of one start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 0-based start index.
    pub start: usize,
    pub heuristic: Heuristic,
    /// The rule that built the start, or `None` if it was drawn per round.
    pub rule: Option<DispatchRule>,
    /// Greedy schedule the run started from.
    pub initial: Schedule,
    /// Best schedule of the run; the greedy one when tabu search is off.
    pub best: Schedule,
    pub iterations: usize,
    pub best_iteration: usize,
    /// Incumbent makespan after every iteration, starting with the greedy
    /// makespan.
    pub history: Vec<i64>,
    /// `None` when tabu search is off.
    pub termination: Option<Termination>,
}

impl RunReport {
    pub fn makespan(&self) -> i64 {
        self.best.makespan()
    }

    /// Makespan saved relative to the greedy start.
    pub fn improvement(&self) -> i64 {
        self.initial.makespan() - self.best.makespan()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start {} ({}): greedy {} → best {} after {} iterations",
            self.start,
            self.heuristic,
            self.initial.makespan(),
            self.best.makespan(),
            self.iterations
        )?;
        if let Some(termination) = self.termination {
            write!(f, " ({termination:?})")?;
        }
        Ok(())
    }
}

/// Outcome of a solve: every start plus the index of the best one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub runs: Vec<RunReport>,
    /// Index into `runs`; the earliest run wins ties.
    pub best_run: usize,
}

impl SolveReport {
    pub(crate) fn new(runs: Vec<RunReport>) -> Self {
        let mut best_run = 0;
        for (index, run) in runs.iter().enumerate() {
            if run.makespan() < runs[best_run].makespan() {
                best_run = index;
            }
        }
        Self { runs, best_run }
    }

    /// The run holding the best schedule.
    pub fn best(&self) -> &RunReport {
        &self.runs[self.best_run]
    }

    pub fn schedule(&self) -> &Schedule {
        &self.best().best
    }

    pub fn makespan(&self) -> i64 {
        self.best().makespan()
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            writeln!(f, "{run}")?;
        }
        write!(f, "best of start {}:\n{}", self.best_run, self.schedule())
    }
}
