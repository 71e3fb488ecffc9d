//! Diagram Rendering
//!
//! Turns a graph into Graphviz DOT text. Two views are offered:
//!
//! - [`render_graph`]: every node and edge, coloured by role.
//! - [`render_path_through_graph`]: the same diagram with nodes and edges
//!   the last run did not visit greyed out, and an optional caption listing
//!   selected context values.
//!
//! Rendering works from a [`GraphSnapshot`], so it never changes the graph
//! except for the run `render_path_through_graph` may trigger.

mod dot;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::GraphError;
use crate::graph::{GraphSnapshot, Graphflow};

pub use dot::to_dot;

/// Layout direction of the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::TopToBottom => f.write_str("TB"),
            RankDir::LeftToRight => f.write_str("LR"),
        }
    }
}

/// Options for [`to_dot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Grey out everything the last run did not visit.
    pub show_path: bool,
    /// Context keys whose values are listed in the caption of a path view.
    pub context_keys: Vec<String>,
    pub rank_dir: RankDir,
}

impl RenderOptions {
    /// Options for a path view annotated with `keys`.
    pub fn path<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            show_path: true,
            context_keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// DOT diagram of every node and edge in `graph`.
pub fn render_graph(graph: &Graphflow) -> String {
    to_dot(&GraphSnapshot::capture(graph), &RenderOptions::default())
}

/// DOT diagram highlighting the path taken by the last run.
///
/// If the graph has not visited anything yet it is run with `context` first;
/// otherwise `context` is ignored and the existing run is drawn. A failing run
/// returns its error instead of a diagram.
pub fn render_path_through_graph<I, K>(
    graph: &mut Graphflow,
    context: Context,
    context_keys: I,
) -> Result<String, GraphError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    if graph.visited().is_empty() {
        graph.run(context)?;
    }
    Ok(to_dot(
        &GraphSnapshot::capture(graph),
        &RenderOptions::path(context_keys),
    ))
}
