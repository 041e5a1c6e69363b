use std::sync::Arc;

use crate::graph::{ConjunctiveGraph, DisjunctiveGraph};
use crate::instance::{Instance, OperationId};

/// An instance paired with its conjunctive graph.
///
/// Cloning is cheap: both halves are reference-counted and never mutated,
/// so every schedule and every candidate shares the same pristine base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobShop {
    instance: Arc<Instance>,
    base: Arc<ConjunctiveGraph>,
}

impl JobShop {
    pub fn new(instance: Instance) -> Self {
        let base = ConjunctiveGraph::build(&instance);
        Self {
            instance: Arc::new(instance),
            base: Arc::new(base),
        }
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The shared conjunctive base graph.
    pub fn base(&self) -> &Arc<ConjunctiveGraph> {
        &self.base
    }

    /// Builds a disjunctive graph for `sequences` on top of the shared base.
    pub fn graph(&self, sequences: &[Vec<OperationId>]) -> DisjunctiveGraph {
        DisjunctiveGraph::new(Arc::clone(&self.base), sequences)
    }
}

impl From<Instance> for JobShop {
    fn from(instance: Instance) -> Self {
        Self::new(instance)
    }
}
