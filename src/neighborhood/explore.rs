#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::moves::{block_moves, Move};
use crate::schedule::Schedule;
use crate::tabu::{TabuMove, TabuProblem};

/// An evaluated neighbor of a schedule.
pub type Candidate = TabuMove<Schedule, Move>;

/// Applies every move to `schedule` and ranks the feasible results.
///
/// Moves that close a cycle are dropped. The rest are sorted by ascending
/// makespan; equal makespans keep the order of `moves`. With the
/// `parallel` feature the moves are evaluated on the rayon pool, which
/// does not change the result.
pub fn evaluate_moves(schedule: &Schedule, moves: &[Move]) -> Vec<Candidate> {
    let evaluate = |mv: &Move| {
        mv.apply(schedule).ok().map(|neighbor| Candidate {
            cost: neighbor.makespan(),
            solution: neighbor,
            key: *mv,
        })
    };

    #[cfg(feature = "parallel")]
    let mut candidates: Vec<Candidate> = moves.par_iter().filter_map(evaluate).collect();
    #[cfg(not(feature = "parallel"))]
    let mut candidates: Vec<Candidate> = moves.iter().filter_map(evaluate).collect();

    candidates.sort_by_key(|candidate| candidate.cost);
    candidates
}

/// Ranked feasible neighbors reachable by one block-boundary swap.
pub fn explore(schedule: &Schedule) -> Vec<Candidate> {
    evaluate_moves(schedule, &block_moves(schedule))
}

/// The block-swap neighborhood as a tabu search problem.
///
/// Solutions are [`Schedule`]s, costs are makespans and the tabu list
/// stores [`Move`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockNeighborhood;

impl TabuProblem for BlockNeighborhood {
    type Solution = Schedule;
    type Key = Move;

    fn cost(&self, schedule: &Schedule) -> i64 {
        schedule.makespan()
    }

    fn neighbors(&self, schedule: &Schedule) -> Vec<Candidate> {
        explore(schedule)
    }

    fn inverse(&self, mv: &Move) -> Move {
        mv.inverse()
    }
}
