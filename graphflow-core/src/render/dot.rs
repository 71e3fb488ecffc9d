//! Graphviz DOT output.

use std::collections::HashSet;

use super::RenderOptions;
use crate::context::Value;
use crate::graph::{GraphSnapshot, NodeKind, NodeSnapshot, Outcome};

const TERMINAL_FILL: &str = "orange";
const DECISION_FILL: &str = "palegreen";
const TASK_FILL: &str = "plum";
const DEAD_END_FILL: &str = "lightcoral";
const UNVISITED_FILL: &str = "lightgrey";
const UNVISITED_FONT: &str = "grey50";

/// Render a snapshot as a DOT digraph.
pub fn to_dot(snapshot: &GraphSnapshot, options: &RenderOptions) -> String {
    let mut dot = String::from("digraph graphflow {\n");
    dot.push_str(&format!("  rankdir={};\n", options.rank_dir));
    dot.push_str("  node [shape=box, style=filled];\n\n");

    let mut clustered = HashSet::new();
    for (index, group) in snapshot.groups.iter().enumerate() {
        dot.push_str(&format!("  subgraph cluster_{} {{\n", index));
        dot.push_str(&format!("    label=\"{}\";\n", escape(&group.name)));
        dot.push_str("    labeljust=l;\n    style=filled;\n    fillcolor=lightgrey;\n");
        for &id in &group.nodes {
            // A node listed in two groups is drawn in the first only.
            if !clustered.insert(id) {
                continue;
            }
            if let Some(node) = snapshot.node(id) {
                dot.push_str(&format!("    {}\n", node_statement(snapshot, node, options)));
            }
        }
        dot.push_str("  }\n");
    }

    for node in &snapshot.nodes {
        if !clustered.contains(&node.id) {
            dot.push_str(&format!("  {}\n", node_statement(snapshot, node, options)));
        }
    }

    if options.show_path {
        if let Some(caption) = caption(snapshot, &options.context_keys) {
            dot.push_str(&format!(
                "  caption [shape=underline, style=solid, margin=0.2, label=\"{}\"];\n",
                escape(&caption)
            ));
        }
    }

    dot.push('\n');
    for edge in &snapshot.edges {
        let mut attrs = Vec::new();
        if edge.outcome != Outcome::Always {
            attrs.push(format!("label=\"{}\"", edge.outcome));
        }
        if options.show_path && !(snapshot.was_visited(edge.from) && snapshot.was_visited(edge.to)) {
            attrs.push(format!("color={}", UNVISITED_FONT));
        }
        if attrs.is_empty() {
            dot.push_str(&format!("  {} -> {};\n", edge.from, edge.to));
        } else {
            dot.push_str(&format!(
                "  {} -> {} [{}];\n",
                edge.from,
                edge.to,
                attrs.join(", ")
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

fn node_statement(snapshot: &GraphSnapshot, node: &NodeSnapshot, options: &RenderOptions) -> String {
    let label = escape(&node.name);
    if options.show_path && !snapshot.was_visited(node.id) {
        return format!(
            "{} [label=\"{}\", fillcolor={}, fontcolor={}];",
            node.id, label, UNVISITED_FILL, UNVISITED_FONT
        );
    }
    format!(
        "{} [label=\"{}\", fillcolor={}];",
        node.id,
        label,
        fill_color(snapshot, node)
    )
}

fn fill_color(snapshot: &GraphSnapshot, node: &NodeSnapshot) -> &'static str {
    if node.kind != NodeKind::Task {
        return TERMINAL_FILL;
    }
    let mut outgoing = snapshot.outgoing(node.id).peekable();
    if outgoing.peek().is_none() {
        return DEAD_END_FILL;
    }
    if outgoing.any(|edge| edge.outcome.is_decision()) {
        DECISION_FILL
    } else {
        TASK_FILL
    }
}

/// "This is the path taken when:" followed by one `key = value` line per key.
fn caption(snapshot: &GraphSnapshot, keys: &[String]) -> Option<String> {
    if keys.is_empty() {
        return None;
    }
    let mut text = String::from("This is the path taken when:\n");
    for key in keys {
        let value = snapshot.context.as_ref().and_then(|ctx| ctx.get(key));
        text.push_str(&format!("\n{} = {}", key, display_value(value)));
    }
    Some(text)
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unset".to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_quotes_and_newlines() {
        assert_eq!(escape("a \"b\"\nc\\"), "a \\\"b\\\"\\nc\\\\");
    }

    #[test]
    fn strings_render_without_quotes() {
        assert_eq!(display_value(Some(&Value::from("Clear"))), "Clear");
        assert_eq!(display_value(Some(&Value::from(3))), "3");
        assert_eq!(display_value(None), "unset");
    }

    #[test]
    fn no_keys_no_caption() {
        let snapshot = GraphSnapshot {
            nodes: Vec::new(),
            edges: Vec::new(),
            groups: Vec::new(),
            visited: Vec::new(),
            context: None,
            state: Default::default(),
        };
        assert!(caption(&snapshot, &[]).is_none());
        let text = caption(&snapshot, &["Sky".to_string()]).unwrap();
        assert!(text.ends_with("Sky = unset"), "{}", text);
    }
}
