//! Graphflow Core
//!
//! This crate provides the core runtime for graphflow: small decision-tree
//! workflows expressed as a graph of tasks instead of nested `if`/`else`
//! blocks. It implements:
//!
//! - The graph model (nodes, outcome-guarded edges, groups)
//! - Structural validation before a run
//! - The executor that walks the graph against a shared context
//! - Graphviz DOT rendering of the graph and of the path a run took
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: nodes, edges, groups, validation and traversal
//! - `context`: the key/value store shared by nodes during a run
//! - `render`: DOT output built from a read-only graph snapshot
//! - `config`: optional validation settings
//! - `error`: error types returned by runs and context access
//! - `logging`: `tracing` helpers for run and node events
//!
//! # Example
//!
//! ```rust
//! use graphflow_core::{Context, EndNode, FnNode, Graphflow, Outcome, StartNode};
//!
//! let mut graph = Graphflow::new();
//! let start = graph.add_node(StartNode::new());
//! let cloudy = graph.add_node(FnNode::new("Is the sky cloudy?", |ctx: &mut Context| {
//!     let sky: String = ctx.get_as("Sky")?;
//!     Ok(if sky == "Cloudy" { Outcome::Yes } else { Outcome::No })
//! }));
//! let rain = graph.add_node(FnNode::new("Forecast Rain", |ctx: &mut Context| {
//!     ctx.set("Forecast", "Rain");
//!     Ok(Outcome::Always)
//! }));
//! let sun = graph.add_node(FnNode::new("Forecast Sun", |ctx: &mut Context| {
//!     ctx.set("Forecast", "Sun");
//!     Ok(Outcome::Always)
//! }));
//! let end = graph.add_node(EndNode::new());
//!
//! graph
//!     .add_edge(start, Outcome::Always, cloudy)
//!     .add_edge(cloudy, Outcome::Yes, rain)
//!     .add_edge(cloudy, Outcome::No, sun)
//!     .add_edge(rain, Outcome::Always, end)
//!     .add_edge(sun, Outcome::Always, end);
//!
//! let ctx = graph.run(Context::new().with("Sky", "Cloudy")).unwrap();
//! assert_eq!(ctx.get_str("Forecast"), Some("Rain"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod logging;
pub mod render;

pub use config::RunConfig;
pub use context::{Context, Value};
pub use error::{ConfigError, ContextError, GraphError, ValidationError};
pub use graph::{
    EndNode, FnNode, GraphSnapshot, Graphflow, Group, GroupId, Node, NodeError, NodeId, NodeKind,
    Outcome, RunState, StartNode, TaskState,
};
