//! The instance-fixed part of the graph.

use super::{Edge, EdgeKind, Node};
use crate::instance::{Instance, MachineId, OperationId};

/// Conjunctive-only DAG: job order plus source and sink.
///
/// Immutable after [`build`](Self::build); share it with an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjunctiveGraph {
    durations: Vec<i64>,
    machines: Vec<MachineId>,
    job_next: Vec<Option<OperationId>>,
    job_prev: Vec<Option<OperationId>>,
    job_heads: Vec<OperationId>,
    job_tails: Vec<OperationId>,
}

impl ConjunctiveGraph {
    /// Builds the conjunctive graph of an instance (N + 2 nodes).
    pub fn build(instance: &Instance) -> Self {
        let n = instance.operation_count();
        let mut job_next = vec![None; n];
        let mut job_prev = vec![None; n];
        let mut job_heads = Vec::with_capacity(instance.job_count());
        let mut job_tails = Vec::with_capacity(instance.job_count());

        for job in instance.jobs() {
            for pair in job.operations.windows(2) {
                job_next[pair[0]] = Some(pair[1]);
                job_prev[pair[1]] = Some(pair[0]);
            }
            if let (Some(first), Some(last)) = (job.first(), job.last()) {
                job_heads.push(first);
                job_tails.push(last);
            }
        }

        Self {
            durations: instance.operations().iter().map(|op| op.duration).collect(),
            machines: instance.operations().iter().map(|op| op.machine).collect(),
            job_next,
            job_prev,
            job_heads,
            job_tails,
        }
    }

    /// Number of operation nodes.
    pub fn operation_count(&self) -> usize {
        self.durations.len()
    }

    /// Number of nodes including source and sink.
    pub fn node_count(&self) -> usize {
        self.durations.len() + 2
    }

    pub fn duration(&self, op: OperationId) -> i64 {
        self.durations[op]
    }

    pub fn machine(&self, op: OperationId) -> MachineId {
        self.machines[op]
    }

    pub fn job_successor(&self, op: OperationId) -> Option<OperationId> {
        self.job_next[op]
    }

    pub fn job_predecessor(&self, op: OperationId) -> Option<OperationId> {
        self.job_prev[op]
    }

    /// First operation of every job (targets of the source edges).
    pub fn job_heads(&self) -> &[OperationId] {
        &self.job_heads
    }

    /// Last operation of every job (tails of the sink edges).
    pub fn job_tails(&self) -> &[OperationId] {
        &self.job_tails
    }

    /// All conjunctive edges.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for &head in &self.job_heads {
            edges.push(Edge {
                from: Node::Source,
                to: Node::Operation(head),
                weight: 0,
                kind: EdgeKind::Conjunctive,
            });
        }
        for (op, next) in self.job_next.iter().enumerate() {
            if let Some(next) = *next {
                edges.push(Edge {
                    from: Node::Operation(op),
                    to: Node::Operation(next),
                    weight: self.durations[op],
                    kind: EdgeKind::Conjunctive,
                });
            }
        }
        for &tail in &self.job_tails {
            edges.push(Edge {
                from: Node::Operation(tail),
                to: Node::Sink,
                weight: self.durations[tail],
                kind: EdgeKind::Conjunctive,
            });
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        2 * self.job_heads.len() + self.job_next.iter().filter(|n| n.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Instance {
        Instance::from_lists(
            3,
            2,
            &[vec![0, 1, 0, 1, 0, 1, 0], vec![0, 1, 0], vec![0, 1]],
            &[vec![2, 1, 2, 2, 1, 1, 1], vec![2, 2, 1], vec![2, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_node_and_edge_counts() {
        let graph = ConjunctiveGraph::build(&toy());
        assert_eq!(graph.node_count(), 14);
        // 3 source edges + 3 sink edges + (6 + 2 + 1) job edges
        assert_eq!(graph.edge_count(), 15);
        assert_eq!(graph.edges().len(), 15);
    }

    #[test]
    fn test_edge_weights_follow_tail_duration() {
        let instance = toy();
        let graph = ConjunctiveGraph::build(&instance);

        for edge in graph.edges() {
            match edge.from {
                Node::Source => assert_eq!(edge.weight, 0),
                Node::Operation(op) => assert_eq!(edge.weight, instance.operation(op).duration),
                Node::Sink => panic!("sink has no outgoing edges"),
            }
            assert_eq!(edge.kind, EdgeKind::Conjunctive);
        }
    }

    #[test]
    fn test_job_links() {
        let graph = ConjunctiveGraph::build(&toy());
        assert_eq!(graph.job_heads(), &[0, 7, 10]);
        assert_eq!(graph.job_tails(), &[6, 9, 11]);
        assert_eq!(graph.job_successor(6), None);
        assert_eq!(graph.job_successor(7), Some(8));
        assert_eq!(graph.job_predecessor(7), None);
        assert_eq!(graph.job_predecessor(11), Some(10));
    }
}
