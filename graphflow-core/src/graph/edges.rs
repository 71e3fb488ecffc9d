//! Edge Table
//!
//! Adjacency of the graph: each source node maps each outcome to at most one
//! target. Sources and outcomes keep the order in which they were first
//! wired, which fixes the order validation reports problems in.

use indexmap::IndexMap;

use super::{NodeId, Outcome};

/// Outgoing edges of a single node.
pub type Outgoing = IndexMap<Outcome, NodeId>;

/// Mapping of (source, outcome) to target.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: IndexMap<NodeId, Outgoing>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge, returning the target it replaced, if any.
    pub fn insert(&mut self, source: NodeId, outcome: Outcome, target: NodeId) -> Option<NodeId> {
        self.edges
            .entry(source)
            .or_default()
            .insert(outcome, target)
    }

    /// The target reached from `source` under `outcome`.
    pub fn get(&self, source: NodeId, outcome: Outcome) -> Option<NodeId> {
        self.edges
            .get(&source)
            .and_then(|outgoing| outgoing.get(&outcome))
            .copied()
    }

    /// All outgoing edges of `source`.
    pub fn outgoing(&self, source: NodeId) -> Option<&Outgoing> {
        self.edges.get(&source)
    }

    /// Sources with their outgoing edges, in wiring order.
    pub fn sources(&self) -> impl Iterator<Item = (NodeId, &Outgoing)> {
        self.edges.iter().map(|(source, outgoing)| (*source, outgoing))
    }

    /// Every edge as a `(source, outcome, target)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Outcome, NodeId)> + '_ {
        self.edges.iter().flat_map(|(source, outgoing)| {
            outgoing
                .iter()
                .map(move |(outcome, target)| (*source, *outcome, *target))
        })
    }

    /// Total number of edges.
    pub fn len(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
