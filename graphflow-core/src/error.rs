//! Error Types
//!
//! Every failure of a run surfaces as a [`GraphError`]. Structural problems
//! found before any node executes are [`ValidationError`]s; failures raised
//! by nodes keep the node's own error as their `source`.

use thiserror::Error;

use crate::graph::{NodeId, NodeKind, Outcome};

/// A structural problem that prevents a graph from running.
///
/// Returned (wrapped in [`GraphError::Validation`]) before any node executes.
/// Only the first problem found is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No node of type `EndNode` was registered.
    #[error("graph needs to contain a node of type EndNode")]
    MissingEnd,

    /// No node of type `StartNode` was registered.
    #[error("graph needs to contain a node of type StartNode")]
    MissingStart,

    /// A node has an `ALWAYS` edge together with a `YES` or `NO` edge.
    #[error("node {node} cannot have an ALWAYS edge as well as a {conflicting} edge")]
    AlwaysWithDecision {
        node: String,
        id: NodeId,
        conflicting: Outcome,
    },

    /// A node has a `YES` edge without a `NO` edge, or the reverse.
    #[error("node {node} has a {present} edge but no {missing} edge")]
    UnpairedDecision {
        node: String,
        id: NodeId,
        present: Outcome,
        missing: Outcome,
    },

    /// A node was added to more than one group.
    #[error("node {node} cannot be in group {first_group:?} as well as group {second_group:?}")]
    DuplicateGroupMember {
        node: String,
        id: NodeId,
        first_group: String,
        second_group: String,
    },

    /// More than one Start or End node, rejected when strict terminals are on.
    #[error("graph contains more than one {kind:?} node ({first} and {second})")]
    DuplicateTerminal {
        kind: NodeKind,
        first: NodeId,
        second: NodeId,
    },
}

/// Error returned by `Graphflow::run`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph failed validation; no node executed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A node's `execute` returned an error. The run stopped at that node.
    #[error("node {node} failed: {source}")]
    NodeFailed {
        node: String,
        id: NodeId,
        #[source]
        source: crate::graph::NodeError,
    },

    /// An edge led to a handle that is not registered in this graph.
    #[error("edge target {0} is not registered in this graph")]
    UnknownNode(NodeId),
}

impl GraphError {
    /// Whether the run was rejected before any node executed.
    pub fn is_validation(&self) -> bool {
        matches!(self, GraphError::Validation(_))
    }

    /// The structural error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            GraphError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Error when reading or writing the execution context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context has no value for key {0:?}")]
    Missing(String),

    #[error("context value for key {key:?} is not a {expected}: {source}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot store value for key {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse config json: {0}")]
    Parse(#[from] serde_json::Error),
}
