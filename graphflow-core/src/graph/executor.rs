//! Graph Executor
//!
//! The executor walks a validated graph from its Start node.
//!
//! # Algorithm
//!
//! 1. Validate the graph. Nothing executes if validation fails.
//! 2. Find the first Start node in registration order.
//! 3. Push it onto a FIFO queue.
//! 4. Pop a node, mark it visited and execute it against the context. A
//!    failure stops the run immediately; context changes are kept.
//! 5. Look up the edge for the outcome the node selected. If it leads to a
//!    node not yet visited, mark that node visited and queue it.
//! 6. Stop when the queue is empty.
//!
//! Because validation leaves at most one matching edge per node, the queue
//! never holds more than one node and the walk is a single path. The run
//! succeeds when that path ends, whether or not it reached the End node.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::graphflow::Slot;
use super::validator::Validator;
use super::{EdgeTable, Group, NodeId, NodeKind};
use crate::config::RunConfig;
use crate::context::Context;
use crate::error::{GraphError, ValidationError};
use crate::logging;

/// Lifecycle of the most recent run of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

/// Mutable borrow of everything a single run touches.
pub(crate) struct Executor<'g> {
    pub(crate) nodes: &'g mut IndexMap<NodeId, Slot>,
    pub(crate) edges: &'g EdgeTable,
    pub(crate) groups: &'g [Group],
    pub(crate) config: &'g RunConfig,
    pub(crate) visited: &'g mut IndexSet<NodeId>,
}

impl Executor<'_> {
    /// Validate, then traverse from the Start node.
    pub(crate) fn run(mut self, ctx: &mut Context) -> Result<(), GraphError> {
        let start = {
            let validator = Validator::new(self.nodes, self.edges, self.groups, self.config);
            if let Err(err) = validator.validate() {
                logging::log_validation_error(&err);
                return Err(err.into());
            }
            match validator.find(NodeKind::Start) {
                Some(start) => start,
                None => {
                    let err = ValidationError::MissingStart;
                    logging::log_validation_error(&err);
                    return Err(err.into());
                }
            }
        };
        self.traverse(start, ctx)
    }

    fn traverse(&mut self, start: NodeId, ctx: &mut Context) -> Result<(), GraphError> {
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            self.visited.insert(id);

            let slot = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
            let node = slot.node.as_mut();
            logging::log_node_start(id, node.name());

            node.state_mut().reset();
            if let Err(source) = node.execute(ctx) {
                return Err(GraphError::NodeFailed {
                    node: node.name().to_string(),
                    id,
                    source,
                });
            }

            let outcome = node.outcome();
            let next = self.edges.get(id, outcome);
            logging::log_node_complete(id, node.name(), outcome, next);

            if let Some(target) = next {
                if !self.nodes.contains_key(&target) {
                    return Err(GraphError::UnknownNode(target));
                }
                if self.visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        Ok(())
    }
}
