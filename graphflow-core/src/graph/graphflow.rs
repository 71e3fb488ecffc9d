//! The Graphflow aggregate: nodes, edges and groups, plus the results of the
//! most recent run.

use indexmap::{IndexMap, IndexSet};

use super::executor::{Executor, RunState};
use super::{EdgeTable, Group, GroupId, Node, NodeId, NodeKind, Outcome};
use crate::config::RunConfig;
use crate::context::Context;
use crate::error::GraphError;
use crate::logging;

/// A registered node together with the kind derived from its type.
pub(crate) struct Slot {
    pub(crate) kind: NodeKind,
    pub(crate) node: Box<dyn Node>,
}

/// A task graph: build it, run it against a [`Context`], then inspect which
/// nodes were visited.
///
/// # Example
///
/// ```rust
/// use graphflow_core::{Context, EndNode, FnNode, Graphflow, Outcome, StartNode};
///
/// let mut graph = Graphflow::new();
/// let start = graph.add_node(StartNode::new());
/// let greet = graph.add_node(FnNode::new("Greet", |ctx: &mut Context| {
///     ctx.set("greeting", "hello");
///     Ok(Outcome::Always)
/// }));
/// let end = graph.add_node(EndNode::new());
/// graph
///     .add_edge(start, Outcome::Always, greet)
///     .add_edge(greet, Outcome::Always, end);
///
/// let ctx = graph.run(Context::new()).unwrap();
/// assert_eq!(ctx.get_str("greeting"), Some("hello"));
/// assert!(graph.was_visited(end));
/// ```
#[derive(Default)]
pub struct Graphflow {
    /// Nodes in registration order.
    nodes: IndexMap<NodeId, Slot>,

    edges: EdgeTable,

    groups: Vec<Group>,

    config: RunConfig,

    /// Context of the most recent run, kept even when the run failed.
    context: Option<Context>,

    /// Nodes visited by the most recent run.
    visited: IndexSet<NodeId>,

    state: RunState,
}

impl Graphflow {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: RunConfig) -> Self {
        Self { config, ..self }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Register a node and return its handle.
    ///
    /// Names and kinds are not checked for uniqueness.
    pub fn add_node<N: Node + 'static>(&mut self, node: N) -> NodeId {
        let id = NodeId::next();
        self.nodes.insert(
            id,
            Slot {
                kind: NodeKind::of::<N>(),
                node: Box::new(node),
            },
        );
        id
    }

    /// Add an edge from `source` to `target`, followed when `source` selects
    /// `outcome`. Replaces any earlier edge for the same source and outcome.
    ///
    /// Nothing is validated until the graph is run.
    pub fn add_edge(&mut self, source: NodeId, outcome: Outcome, target: NodeId) -> &mut Self {
        self.edges.insert(source, outcome, target);
        self
    }

    /// Create an empty group.
    pub fn add_group(&mut self, name: impl Into<String>) -> &mut Group {
        self.groups.push(Group::new(name));
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.id() == id)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(&id).map(|slot| slot.node.as_ref())
    }

    pub fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(&id).map(|slot| slot.kind)
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, NodeKind, &dyn Node)> {
        self.nodes
            .iter()
            .map(|(id, slot)| (*id, slot.kind, slot.node.as_ref()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    /// Context used by the most recent run.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Take the context of the most recent run out of the graph.
    pub fn take_context(&mut self) -> Option<Context> {
        self.context.take()
    }

    /// Nodes visited by the most recent run, in visiting order.
    pub fn visited(&self) -> &IndexSet<NodeId> {
        &self.visited
    }

    pub fn was_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Validate the graph and walk it from the Start node.
    ///
    /// The context is stored on the graph and a reference to it is returned
    /// on success. On failure the context stays available through
    /// [`Graphflow::context`] with whatever changes the nodes made before the
    /// failing one.
    pub fn run(&mut self, context: Context) -> Result<&Context, GraphError> {
        self.visited.clear();
        self.state = RunState::Running;
        logging::log_run_start(self.nodes.len(), self.edges.len());

        let ctx = self.context.insert(context);
        let executor = Executor {
            nodes: &mut self.nodes,
            edges: &self.edges,
            groups: &self.groups,
            config: &self.config,
            visited: &mut self.visited,
        };

        match executor.run(ctx) {
            Ok(()) => {
                self.state = RunState::Succeeded;
                logging::log_run_complete(self.visited.len());
                Ok(ctx)
            }
            Err(err) => {
                self.state = RunState::Failed;
                logging::log_run_error(&err, self.visited.len());
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Graphflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graphflow")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("groups", &self.groups.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Value;
    use crate::graph::{EndNode, FnNode, StartNode};

    #[test]
    fn nodes_keep_registration_order() {
        let mut graph = Graphflow::new();
        let start = graph.add_node(StartNode::new());
        let task = graph.add_node(FnNode::new("", |_ctx: &mut Context| Ok(Outcome::Always)));
        let end = graph.add_node(EndNode::new());

        let order: Vec<_> = graph.nodes().map(|(id, kind, _)| (id, kind)).collect();
        assert_eq!(
            order,
            vec![
                (start, NodeKind::Start),
                (task, NodeKind::Task),
                (end, NodeKind::End)
            ]
        );
        assert_eq!(graph.node(task).map(|n| n.name()), Some(""));
        assert_eq!(graph.state(), RunState::NotStarted);
    }

    #[test]
    fn group_handle_finds_group() {
        let mut graph = Graphflow::new();
        let a = graph.add_node(FnNode::new("a", |_ctx: &mut Context| Ok(Outcome::Always)));
        let id = graph.add_group("Forecasting").id();

        if let Some(group) = graph.group_mut(id) {
            group.add_nodes([a]);
        }
        assert!(graph.group_mut(GroupId::next()).is_none());

        assert_eq!(graph.groups().len(), 1);
        assert_eq!(graph.groups()[0].nodes(), &[a]);
    }

    #[test]
    fn rerun_resets_context_and_visited() {
        let mut graph = Graphflow::new();
        let start = graph.add_node(StartNode::new());
        graph.add_node(EndNode::new());

        graph.run(Context::new().with("run", 1)).unwrap();
        assert_eq!(graph.visited().len(), 1);

        graph.run(Context::new().with("run", 2)).unwrap();
        assert_eq!(graph.visited().iter().copied().collect::<Vec<_>>(), vec![start]);
        assert_eq!(graph.context().and_then(|c| c.get("run")), Some(&Value::from(2)));

        let taken = graph.take_context();
        assert!(taken.is_some());
        assert!(graph.context().is_none());
    }
}
