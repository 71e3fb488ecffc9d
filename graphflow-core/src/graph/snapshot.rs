//! Read-only snapshot of a graph and its last run.
//!
//! Renderers and other observers work from a snapshot instead of the live
//! graph, so they never hold a borrow of the nodes.

use serde::{Deserialize, Serialize};

use super::{Graphflow, GroupId, NodeId, NodeKind, Outcome, RunState};
use crate::context::Context;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub from: NodeId,
    pub outcome: Outcome,
    pub to: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub id: GroupId,
    pub name: String,
    pub nodes: Vec<NodeId>,
}

/// Everything a renderer needs: structure, visited set and context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Nodes in registration order.
    pub nodes: Vec<NodeSnapshot>,
    /// Edges in wiring order.
    pub edges: Vec<EdgeSnapshot>,
    pub groups: Vec<GroupSnapshot>,
    /// Nodes visited by the last run, in visiting order.
    pub visited: Vec<NodeId>,
    pub context: Option<Context>,
    pub state: RunState,
}

impl GraphSnapshot {
    /// Capture the current state of `graph`.
    pub fn capture(graph: &Graphflow) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|(id, kind, node)| NodeSnapshot {
                    id,
                    name: node.name().to_string(),
                    kind,
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|(from, outcome, to)| EdgeSnapshot { from, outcome, to })
                .collect(),
            groups: graph
                .groups()
                .iter()
                .map(|group| GroupSnapshot {
                    id: group.id(),
                    name: group.name().to_string(),
                    nodes: group.nodes().to_vec(),
                })
                .collect(),
            visited: graph.visited().iter().copied().collect(),
            context: graph.context().cloned(),
            state: graph.state(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn was_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    /// Edges leaving `id`.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &EdgeSnapshot> {
        self.edges.iter().filter(move |edge| edge.from == id)
    }

    /// The group `id` belongs to, if any. The first group wins.
    pub fn group_of(&self, id: NodeId) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|group| group.nodes.contains(&id))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
