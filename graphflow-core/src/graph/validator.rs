//! Structural Validation
//!
//! Checks run before any node executes:
//!
//! 1. An End node is registered.
//! 2. With strict terminals on, at most one Start and one End node exist.
//! 3. Every node with outgoing edges uses either exactly `{ALWAYS}` or
//!    exactly `{YES, NO}`. `ERROR` edges are free and not checked.
//! 4. No node belongs to more than one group.
//!
//! Nodes are checked in registration order, then any edge sources that are
//! not registered in this graph. The first failing check is reported.
//! Reachability, cycles and the
//! existence of edge targets are not checked.

use indexmap::IndexMap;

use super::graphflow::Slot;
use super::{EdgeTable, Group, NodeId, NodeKind, Outcome, Outgoing};
use crate::config::RunConfig;
use crate::error::ValidationError;

/// Borrowed view of the parts of a graph that validation inspects.
pub(crate) struct Validator<'g> {
    nodes: &'g IndexMap<NodeId, Slot>,
    edges: &'g EdgeTable,
    groups: &'g [Group],
    config: &'g RunConfig,
}

impl<'g> Validator<'g> {
    pub(crate) fn new(
        nodes: &'g IndexMap<NodeId, Slot>,
        edges: &'g EdgeTable,
        groups: &'g [Group],
        config: &'g RunConfig,
    ) -> Self {
        Self {
            nodes,
            edges,
            groups,
            config,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        self.find(NodeKind::End).ok_or(ValidationError::MissingEnd)?;
        if self.config.strict_terminals {
            self.check_unique(NodeKind::Start)?;
            self.check_unique(NodeKind::End)?;
        }
        for &source in self.nodes.keys() {
            if let Some(outgoing) = self.edges.outgoing(source) {
                self.check_outcomes(source, outgoing)?;
            }
        }
        for (source, outgoing) in self.edges.sources() {
            if !self.nodes.contains_key(&source) {
                self.check_outcomes(source, outgoing)?;
            }
        }
        self.check_groups()
    }

    /// First node of `kind` in registration order.
    pub(crate) fn find(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, slot)| slot.kind == kind)
            .map(|(id, _)| *id)
    }

    fn check_unique(&self, kind: NodeKind) -> Result<(), ValidationError> {
        let mut ids = self
            .nodes
            .iter()
            .filter(|(_, slot)| slot.kind == kind)
            .map(|(id, _)| *id);
        if let (Some(first), Some(second)) = (ids.next(), ids.next()) {
            return Err(ValidationError::DuplicateTerminal {
                kind,
                first,
                second,
            });
        }
        Ok(())
    }

    fn check_outcomes(&self, source: NodeId, outgoing: &Outgoing) -> Result<(), ValidationError> {
        let has = |outcome: Outcome| outgoing.contains_key(&outcome);

        if has(Outcome::Always) {
            let conflicting = [Outcome::Yes, Outcome::No].into_iter().find(|o| has(*o));
            if let Some(conflicting) = conflicting {
                return Err(ValidationError::AlwaysWithDecision {
                    node: self.name_of(source),
                    id: source,
                    conflicting,
                });
            }
            return Ok(());
        }

        let unpaired = match (has(Outcome::Yes), has(Outcome::No)) {
            (true, false) => Some((Outcome::Yes, Outcome::No)),
            (false, true) => Some((Outcome::No, Outcome::Yes)),
            _ => None,
        };
        match unpaired {
            Some((present, missing)) => Err(ValidationError::UnpairedDecision {
                node: self.name_of(source),
                id: source,
                present,
                missing,
            }),
            None => Ok(()),
        }
    }

    /// Groups are compared pairwise in creation order. Within a pair, the
    /// earlier group's members are checked in the order they were added.
    fn check_groups(&self) -> Result<(), ValidationError> {
        for (i, first) in self.groups.iter().enumerate() {
            for second in &self.groups[i + 1..] {
                if let Some(&node) = first.nodes().iter().find(|id| second.contains(**id)) {
                    return Err(ValidationError::DuplicateGroupMember {
                        node: self.name_of(node),
                        id: node,
                        first_group: first.name().to_string(),
                        second_group: second.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn name_of(&self, id: NodeId) -> String {
        self.nodes
            .get(&id)
            .map(|slot| slot.node.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
