//! Node Groups
//!
//! Groups cluster nodes under a name for diagram layout. They have no effect
//! on traversal. A node may only belong to one group; that rule is checked
//! when the graph is validated, not when nodes are added.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::NodeId;

/// Unique identifier for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(u64);

impl GroupId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A named set of nodes.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    name: String,
    members: SmallVec<[NodeId; 4]>,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::next(),
            name: name.into(),
            members: SmallVec::new(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add nodes to the group. Nodes already in this group are skipped.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = NodeId>) -> &mut Self {
        for node in nodes {
            if !self.members.contains(&node) {
                self.members.push(node);
            }
        }
        self
    }

    /// Members in the order they were added.
    pub fn nodes(&self) -> &[NodeId] {
        &self.members
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }
}
