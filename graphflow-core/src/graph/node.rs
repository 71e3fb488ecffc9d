//! Graph Nodes
//!
//! This module defines the node capability that every task plugged into a
//! graph implements, the handle type used to refer to registered nodes, and
//! the two built-in terminal nodes.
//!
//! # Shared behaviour
//!
//! Every node owns a [`TaskState`] holding the outcome it selected during its
//! last execution. Concrete nodes expose it through `state`/`state_mut` and
//! get the outcome accessors for free; they override only `execute` and
//! `name` when they need to.

use std::any::TypeId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::context::Context;

/// Error type returned by node execution.
///
/// Boxed so that node authors can propagate any error with `?`.
pub type NodeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unique identifier for a node registered in a graph.
///
/// Ids are drawn from a process-wide counter, so a handle obtained from one
/// graph never aliases a node of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// The kind of a registered node, derived from its concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A [`StartNode`]. Traversal begins at the first one registered.
    Start,

    /// An [`EndNode`]. A graph must contain one to be runnable.
    End,

    /// Any other node.
    Task,
}

impl NodeKind {
    /// Classify a concrete node type.
    pub fn of<N: Node + 'static>() -> Self {
        let id = TypeId::of::<N>();
        if id == TypeId::of::<StartNode>() {
            NodeKind::Start
        } else if id == TypeId::of::<EndNode>() {
            NodeKind::End
        } else {
            NodeKind::Task
        }
    }
}

/// Outcome bookkeeping shared by every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskState {
    outcome: Outcome,
}

impl TaskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outcome selected during the last execution.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Return to `Outcome::Always`. Called by the executor before each execution.
    pub fn reset(&mut self) {
        self.outcome = Outcome::Always;
    }
}

/// A unit of work in a graph.
///
/// # Example
///
/// ```rust
/// use graphflow_core::{Context, Node, NodeError, Outcome, TaskState};
///
/// #[derive(Default)]
/// struct IsTheSkyCloudy {
///     state: TaskState,
/// }
///
/// impl Node for IsTheSkyCloudy {
///     fn state(&self) -> &TaskState {
///         &self.state
///     }
///
///     fn state_mut(&mut self) -> &mut TaskState {
///         &mut self.state
///     }
///
///     fn name(&self) -> &str {
///         "Is the sky cloudy?"
///     }
///
///     fn execute(&mut self, ctx: &mut Context) -> Result<(), NodeError> {
///         let sky: String = ctx.get_as("Sky")?;
///         self.set_outcome(if sky == "Cloudy" { Outcome::Yes } else { Outcome::No });
///         Ok(())
///     }
/// }
/// ```
pub trait Node {
    /// The composed outcome state.
    fn state(&self) -> &TaskState;

    fn state_mut(&mut self) -> &mut TaskState;

    /// Human-readable name used in logs, errors and diagrams.
    fn name(&self) -> &str {
        "Unnamed Task"
    }

    /// Run the node against the shared context.
    ///
    /// To route anywhere other than the `Always` edge, call `set_outcome`
    /// before returning.
    fn execute(&mut self, _ctx: &mut Context) -> Result<(), NodeError> {
        Ok(())
    }

    fn outcome(&self) -> Outcome {
        self.state().outcome()
    }

    fn set_outcome(&mut self, outcome: Outcome) {
        self.state_mut().set_outcome(outcome);
    }
}

/// Entry point of a graph.
#[derive(Debug, Default)]
pub struct StartNode {
    state: TaskState,
}

impl StartNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for StartNode {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn name(&self) -> &str {
        "Start"
    }
}

/// Terminal node of a graph.
#[derive(Debug, Default)]
pub struct EndNode {
    state: TaskState,
}

impl EndNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for EndNode {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn name(&self) -> &str {
        "End"
    }
}

type NodeFn = Box<dyn FnMut(&mut Context) -> Result<Outcome, NodeError>>;

/// A node backed by a closure. The closure's return value becomes the
/// selected outcome.
pub struct FnNode {
    name: String,
    state: TaskState,
    func: NodeFn,
}

impl FnNode {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: FnMut(&mut Context) -> Result<Outcome, NodeError> + 'static,
    {
        Self {
            name: name.into(),
            state: TaskState::new(),
            func: Box::new(func),
        }
    }
}

impl fmt::Debug for FnNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNode")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Node for FnNode {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, ctx: &mut Context) -> Result<(), NodeError> {
        let outcome = (self.func)(ctx)?;
        self.set_outcome(outcome);
        Ok(())
    }
}
