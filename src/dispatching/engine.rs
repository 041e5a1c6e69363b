//! Rule composition engine.

use super::{DispatchContext, PriorityRule};
use crate::instance::OperationId;

/// Engine for ranking eligible operations by one or more priority rules.
///
/// Rules are applied in order: a later rule is only consulted when every
/// earlier rule ties. Operations tied on every rule keep their input order
/// (stable sort).
///
/// # Examples
///
/// ```
/// use u_jobshop::dispatching::{DispatchContext, DispatchRule, RuleEngine};
/// use u_jobshop::instance::Instance;
///
/// let instance = Instance::new(1, &[vec![(0, 2)], vec![(0, 5)], vec![(0, 3)]]).unwrap();
/// let placed = vec![false; instance.operation_count()];
/// let ctx = DispatchContext::new(&instance, &placed);
///
/// let engine = RuleEngine::new().with_rule(DispatchRule::Lpt);
/// assert_eq!(engine.sort(&[0, 1, 2], &ctx), vec![1, 2, 0]);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn PriorityRule>>,
}

impl RuleEngine {
    /// Creates an engine with no rules (input order is kept).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    fn compute_scores(&self, op: OperationId, context: &DispatchContext<'_>) -> Vec<i64> {
        let operation = context.instance().operation(op);
        self.rules
            .iter()
            .map(|rule| rule.score(operation, context))
            .collect()
    }

    /// Returns `ops` sorted by priority (lowest score first).
    pub fn sort(&self, ops: &[OperationId], context: &DispatchContext<'_>) -> Vec<OperationId> {
        if self.rules.is_empty() {
            return ops.to_vec();
        }

        let mut scored: Vec<(Vec<i64>, OperationId)> = ops
            .iter()
            .map(|&op| (self.compute_scores(op, context), op))
            .collect();

        // Lexicographic over rule scores; `sort_by` is stable.
        scored.sort_by(|a, b| a.0.cmp(&b.0));
        scored.into_iter().map(|(_, op)| op).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::DispatchRule;
    use crate::instance::{Instance, Operation};

    // job 0: 0(m0,d3) 1(m1,d1)
    // job 1: 2(m0,d1) 3(m1,d4) 4(m0,d2)
    // job 2: 5(m0,d3)
    // job 3: 6(m0,d1)
    fn sample() -> Instance {
        Instance::new(
            2,
            &[
                vec![(0, 3), (1, 1)],
                vec![(0, 1), (1, 4), (0, 2)],
                vec![(0, 3)],
                vec![(0, 1)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_single_rule_sort() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        let spt = RuleEngine::new().with_rule(DispatchRule::Spt);
        assert_eq!(spt.sort(&[0, 2, 5], &ctx), vec![2, 0, 5]);

        let mwkr = RuleEngine::new().with_rule(DispatchRule::Mwkr);
        assert_eq!(mwkr.sort(&[0, 2, 5], &ctx), vec![2, 0, 5]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        // 0 and 5 both last 3.
        let lpt = RuleEngine::new().with_rule(DispatchRule::Lpt);
        assert_eq!(lpt.sort(&[5, 2, 0], &ctx), vec![5, 0, 2]);
        assert_eq!(lpt.sort(&[0, 2, 5], &ctx), vec![0, 5, 2]);
    }

    #[test]
    fn test_sequential_tie_breaking() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        // 0 and 5 tie on LPT; MIS prefers 0 (one pending successor).
        let engine = RuleEngine::new()
            .with_rule(DispatchRule::Lpt)
            .with_rule(DispatchRule::Mis);
        assert_eq!(engine.sort(&[5, 0, 6], &ctx), vec![0, 5, 6]);
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let instance = sample();
        let placed = vec![false; instance.operation_count()];
        let ctx = DispatchContext::new(&instance, &placed);

        assert_eq!(RuleEngine::new().sort(&[6, 0, 2], &ctx), vec![6, 0, 2]);
        assert!(RuleEngine::new().with_rule(DispatchRule::Mis).sort(&[], &ctx).is_empty());
    }

    // ---- Context-dependent custom rule ----

    struct PlacedSuccessorsLast;

    impl PriorityRule for PlacedSuccessorsLast {
        fn name(&self) -> &str {
            "PlacedSuccessorsLast"
        }

        fn score(&self, op: &Operation, ctx: &DispatchContext<'_>) -> i64 {
            let placed = ctx
                .instance()
                .successors(op.id)
                .iter()
                .filter(|&&s| ctx.is_placed(s))
                .count();
            placed as i64
        }
    }

    #[test]
    fn test_context_dependent_rule() {
        let instance = sample();
        let mut placed = vec![false; instance.operation_count()];
        placed[1] = true;
        let ctx = DispatchContext::new(&instance, &placed);

        let engine = RuleEngine::new().with_rule(PlacedSuccessorsLast);
        assert_eq!(engine.sort(&[0, 2, 5], &ctx), vec![2, 5, 0]);
    }
}
