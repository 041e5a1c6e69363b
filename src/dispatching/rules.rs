//! Built-in dispatching rules.
//!
//! | Rule | Prefers |
//! |------|---------|
//! | LPT  | longest processing time |
//! | SPT  | shortest processing time |
//! | MIS  | most pending same-job successors |
//! | MWKR | most pending same-job work |
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::{DispatchContext, PriorityRule};
use crate::instance::Operation;

/// One of the four built-in dispatch rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchRule {
    /// Longest Processing Time.
    Lpt,
    /// Shortest Processing Time.
    Spt,
    /// Most successors In the job Still unscheduled.
    Mis,
    /// Most WorK Remaining after this operation.
    Mwkr,
}

impl DispatchRule {
    /// All rules, in the order used for one-start-per-rule multistart.
    pub const ALL: [DispatchRule; 4] = [Self::Lpt, Self::Spt, Self::Mis, Self::Mwkr];

    /// Short upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lpt => "LPT",
            Self::Spt => "SPT",
            Self::Mis => "MIS",
            Self::Mwkr => "MWKR",
        }
    }
}

impl PriorityRule for DispatchRule {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn score(&self, operation: &Operation, context: &DispatchContext<'_>) -> i64 {
        match self {
            Self::Lpt => -operation.duration,
            Self::Spt => operation.duration,
            Self::Mis => -(context.pending_successor_count(operation.id) as i64),
            Self::Mwkr => -context.pending_successor_work(operation.id),
        }
    }
}

impl fmt::Display for DispatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized rule or heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dispatch rule '{0}' (expected LPT, SPT, MIS, MWKR or auto)")]
pub struct ParseRuleError(pub String);

impl FromStr for DispatchRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LPT" => Ok(Self::Lpt),
            "SPT" => Ok(Self::Spt),
            "MIS" => Ok(Self::Mis),
            "MWKR" => Ok(Self::Mwkr),
            _ => Err(ParseRuleError(s.to_string())),
        }
    }
}

/// How the greedy constructor picks its dispatch rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// The same rule in every round.
    Fixed(DispatchRule),
    /// A rule drawn uniformly from [`DispatchRule::ALL`] at the start of
    /// every construction round.
    #[default]
    Auto,
}

impl Heuristic {
    /// The rule to use for the next round.
    ///
    /// Draws from `rng` only for [`Heuristic::Auto`].
    pub fn resolve<R: Rng>(self, rng: &mut R) -> DispatchRule {
        match self {
            Self::Fixed(rule) => rule,
            Self::Auto => DispatchRule::ALL[rng.random_range(0..DispatchRule::ALL.len())],
        }
    }

    /// The fixed rule, if any.
    pub fn fixed(self) -> Option<DispatchRule> {
        match self {
            Self::Fixed(rule) => Some(rule),
            Self::Auto => None,
        }
    }
}

impl From<DispatchRule> for Heuristic {
    fn from(rule: DispatchRule) -> Self {
        Self::Fixed(rule)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(rule) => fmt::Display::fmt(rule, f),
            Self::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Instance {
        // job 0: 0(d=2) 1(d=5) 2(d=1); job 1: 3(d=4) 4(d=3)
        Instance::new(2, &[vec![(0, 2), (1, 5), (0, 1)], vec![(1, 4), (0, 3)]]).unwrap()
    }

    #[test]
    fn test_duration_rules() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        let op = instance.operation(3);
        assert_eq!(DispatchRule::Lpt.score(op, &ctx), -4);
        assert_eq!(DispatchRule::Spt.score(op, &ctx), 4);
    }

    #[test]
    fn test_successor_rules() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        assert_eq!(DispatchRule::Mis.score(instance.operation(0), &ctx), -2);
        assert_eq!(DispatchRule::Mis.score(instance.operation(3), &ctx), -1);
        assert_eq!(DispatchRule::Mwkr.score(instance.operation(0), &ctx), -6);
        assert_eq!(DispatchRule::Mwkr.score(instance.operation(3), &ctx), -3);
        assert_eq!(DispatchRule::Mwkr.score(instance.operation(2), &ctx), 0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("lpt".parse::<DispatchRule>(), Ok(DispatchRule::Lpt));
        assert_eq!("MWKR".parse::<DispatchRule>(), Ok(DispatchRule::Mwkr));
        assert_eq!("Auto".parse::<Heuristic>(), Ok(Heuristic::Auto));
        assert_eq!("mis".parse::<Heuristic>(), Ok(Heuristic::Fixed(DispatchRule::Mis)));
        assert!("EDD".parse::<Heuristic>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for rule in DispatchRule::ALL {
            assert_eq!(rule.to_string().parse::<DispatchRule>(), Ok(rule));
        }
        assert_eq!(Heuristic::Auto.to_string(), "auto");
    }

    #[test]
    fn test_fixed_heuristic_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(Heuristic::Fixed(DispatchRule::Spt).resolve(&mut rng), DispatchRule::Spt);
        }
    }

    #[test]
    fn test_auto_heuristic_is_seeded() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16)
                .map(|_| Heuristic::Auto.resolve(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(11), draw(11));
        assert!(draw(11).iter().all(|r| DispatchRule::ALL.contains(r)));
    }
}
