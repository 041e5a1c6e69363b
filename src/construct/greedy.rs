use rand::Rng;

use super::ground_set::GroundSet;
use crate::dispatching::{DispatchContext, Heuristic, RuleEngine};
use crate::error::{JobShopError, SequenceError};
use crate::monitor::SearchMonitor;
use crate::schedule::{JobShop, Schedule};

/// Builds a feasible schedule by dispatching one operation per machine per
/// round.
pub struct GreedyConstructor;

impl GreedyConstructor {
    /// Runs the constructor until every operation is sequenced.
    ///
    /// Every round resolves `heuristic` to a rule (drawing from `rng` only
    /// for [`Heuristic::Auto`]), then visits the machines in index order.
    /// A machine ranks its eligible operations by the rule and appends the
    /// first one that passes the security condition, or nothing if none
    /// does. Placements are visible to the machines visited after it in the
    /// same round.
    ///
    /// # Errors
    /// [`JobShopError::ConstructionStalled`] if a round places nothing and
    /// [`JobShopError::InadmissibleConstruction`] if the result is cyclic
    /// and [`JobShopError::MalformedConstruction`] if it misses or repeats
    /// an operation. None of these can happen for a valid instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_jobshop::construct::GreedyConstructor;
    /// use u_jobshop::dispatching::{DispatchRule, Heuristic};
    /// use u_jobshop::instance::Instance;
    /// use u_jobshop::monitor::NoOpMonitor;
    /// use u_jobshop::schedule::JobShop;
    ///
    /// let shop = JobShop::new(Instance::new(2, &[vec![(0, 3), (1, 2)], vec![(1, 4), (0, 1)]]).unwrap());
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let schedule = GreedyConstructor::construct(
    ///     &shop,
    ///     Heuristic::Fixed(DispatchRule::Lpt),
    ///     &mut rng,
    ///     &mut NoOpMonitor,
    /// )
    /// .unwrap();
    /// assert_eq!(schedule.sequences(), &[vec![0, 3], vec![2, 1]]);
    /// assert_eq!(schedule.makespan(), 6);
    /// ```
    pub fn construct<R, M>(
        shop: &JobShop,
        heuristic: Heuristic,
        rng: &mut R,
        monitor: &mut M,
    ) -> Result<Schedule, JobShopError>
    where
        R: Rng,
        M: SearchMonitor,
    {
        let instance = shop.instance();
        let mut ground = GroundSet::new(instance);
        let mut sequences = vec![Vec::new(); instance.machine_count()];
        let mut round = 0;

        while !ground.is_empty() {
            round += 1;
            let rule = heuristic.resolve(rng);
            let engine = RuleEngine::new().with_rule(rule);
            monitor.on_construction_round(round, rule, ground.remaining());

            let mut placed_this_round = 0;
            for (machine, sequence) in sequences.iter_mut().enumerate() {
                let eligible = ground.heads(machine);
                if eligible.is_empty() {
                    continue;
                }

                let ranked = engine.sort(&eligible, &DispatchContext::new(instance, ground.placed()));
                let choice = ranked.into_iter().find(|&op| ground.is_secure(instance, op));
                match choice {
                    Some(op) => {
                        let popped = ground.place(instance, op);
                        debug_assert!(popped, "operation {op} is not the head of its queue");
                        sequence.push(op);
                        placed_this_round += 1;
                        monitor.on_placement(round, machine, op);
                    }
                    None => monitor.on_machine_blocked(round, machine, &eligible),
                }
            }

            if placed_this_round == 0 {
                return Err(JobShopError::ConstructionStalled {
                    round,
                    remaining: ground.remaining(),
                });
            }
        }

        let schedule = Schedule::evaluate(shop, sequences).map_err(|err| match err {
            SequenceError::Cycle(cycle) => JobShopError::InadmissibleConstruction { blocked: cycle.blocked },
            other => JobShopError::MalformedConstruction(other),
        })?;
        monitor.on_construction_done(round, schedule.makespan());
        Ok(schedule)
    }
}
