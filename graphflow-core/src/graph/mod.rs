//! Task Graph
//!
//! This module implements the graph model and the traversal engine.
//!
//! # Overview
//!
//! A graph is a set of nodes joined by edges guarded by an [`Outcome`]:
//!
//! - Nodes execute against a shared [`Context`](crate::Context) and select
//!   an outcome while doing so.
//! - An edge `(source, outcome) -> target` is followed when `source` selects
//!   `outcome`. Each source has at most one target per outcome.
//! - Groups cluster nodes for diagrams and do not affect traversal.
//!
//! # Design Decisions
//!
//! 1. Nodes are referred to by [`NodeId`] handles issued at registration, not
//!    by reference identity. Edges and groups are keyed by handle.
//!
//! 2. Registration order is kept and is the canonical order for finding the
//!    Start and End nodes and for reporting validation problems.
//!
//! 3. Validation is deferred to `Graphflow::run`, so a graph can be wired in
//!    any order.

mod edges;
mod executor;
mod graphflow;
mod group;
mod node;
mod outcome;
mod snapshot;
mod validator;

pub use edges::{EdgeTable, Outgoing};
pub use executor::RunState;
pub use graphflow::Graphflow;
pub use group::{Group, GroupId};
pub use node::{EndNode, FnNode, Node, NodeError, NodeId, NodeKind, StartNode, TaskState};
pub use outcome::{Outcome, ParseOutcomeError};
pub use snapshot::{EdgeSnapshot, GraphSnapshot, GroupSnapshot, NodeSnapshot};
