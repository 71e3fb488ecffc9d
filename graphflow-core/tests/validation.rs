//! Integration tests: structural validation rejects bad graphs before any
//! node executes.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::SetForecast;
use graphflow_core::{
    Context, EndNode, FnNode, Graphflow, NodeId, Outcome, RunConfig, RunState, StartNode,
    ValidationError,
};

/// A node that counts its executions.
fn spy(count: &Rc<Cell<u32>>) -> FnNode {
    let count = count.clone();
    FnNode::new("spy", move |_ctx: &mut Context| {
        count.set(count.get() + 1);
        Ok(Outcome::Always)
    })
}

fn expect_validation_error(graph: &mut Graphflow) -> ValidationError {
    let err = graph.run(Context::new()).unwrap_err();
    assert_eq!(graph.state(), RunState::Failed);
    assert!(graph.visited().is_empty(), "no node may run: {:?}", graph.visited());
    err.as_validation()
        .cloned()
        .unwrap_or_else(|| panic!("expected validation error, got {:?}", err))
}

/// Start -> sun, with `extra` edges on `sun`.
fn start_sun_end(extra: &[(Outcome, bool)], count: &Rc<Cell<u32>>) -> Graphflow {
    let mut graph = Graphflow::new();
    let start = graph.add_node(StartNode::new());
    let sun: NodeId = graph.add_node(spy(count));
    let end = graph.add_node(EndNode::new());
    graph.add_edge(start, Outcome::Always, sun);
    for &(outcome, to_end) in extra {
        graph.add_edge(sun, outcome, if to_end { end } else { start });
    }
    graph
}

#[test]
fn graph_without_start_node_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = Graphflow::new();
    let sun = graph.add_node(spy(&count));
    let end = graph.add_node(EndNode::new());
    graph.add_edge(sun, Outcome::Always, end);

    assert_eq!(expect_validation_error(&mut graph), ValidationError::MissingStart);
    assert_eq!(count.get(), 0);
}

#[test]
fn graph_without_end_node_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = Graphflow::new();
    let start = graph.add_node(StartNode::new());
    let sun = graph.add_node(spy(&count));
    graph.add_edge(start, Outcome::Always, sun);

    assert_eq!(expect_validation_error(&mut graph), ValidationError::MissingEnd);
    assert_eq!(count.get(), 0);
}

#[test]
fn always_with_yes_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::Always, true), (Outcome::Yes, true)], &count);

    assert!(matches!(
        expect_validation_error(&mut graph),
        ValidationError::AlwaysWithDecision {
            conflicting: Outcome::Yes,
            ..
        }
    ));
    assert_eq!(count.get(), 0);
}

#[test]
fn always_with_no_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::Always, true), (Outcome::No, true)], &count);

    assert!(matches!(
        expect_validation_error(&mut graph),
        ValidationError::AlwaysWithDecision {
            conflicting: Outcome::No,
            ..
        }
    ));
}

#[test]
fn yes_without_no_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::Yes, true)], &count);

    let err = expect_validation_error(&mut graph);
    assert!(matches!(
        err,
        ValidationError::UnpairedDecision {
            present: Outcome::Yes,
            missing: Outcome::No,
            ..
        }
    ));
    assert_eq!(err.to_string(), "node spy has a YES edge but no NO edge");
}

#[test]
fn no_without_yes_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::No, true)], &count);

    assert!(matches!(
        expect_validation_error(&mut graph),
        ValidationError::UnpairedDecision {
            present: Outcome::No,
            missing: Outcome::Yes,
            ..
        }
    ));
}

#[test]
fn yes_and_no_together_pass() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::Yes, true), (Outcome::No, false)], &count);

    // The spy selects ALWAYS, which has no edge here, so the walk stops at it.
    assert!(graph.run(Context::new()).is_ok());
    assert_eq!(count.get(), 1);
}

#[test]
fn re_adding_an_edge_replaces_its_target() {
    let count = Rc::new(Cell::new(0));
    let mut graph = start_sun_end(&[(Outcome::Always, false), (Outcome::Always, true)], &count);

    assert!(graph.run(Context::new()).is_ok());
    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.visited().len(), 3);
    assert_eq!(count.get(), 1);
}

#[test]
fn graph_without_edges_runs_only_start() {
    let mut graph = Graphflow::new();
    let start = graph.add_node(StartNode::new());
    let sun = graph.add_node(SetForecast::new("Forecast Sun", "Sun"));
    graph.add_node(EndNode::new());

    let ctx = graph.run(Context::new()).unwrap();

    assert!(ctx.is_empty());
    assert_eq!(graph.visited().iter().copied().collect::<Vec<_>>(), vec![start]);
    assert!(!graph.was_visited(sun));
}

#[test]
fn node_in_two_groups_fails() {
    let count = Rc::new(Cell::new(0));
    let mut graph = Graphflow::new();
    let start = graph.add_node(StartNode::new());
    let sun = graph.add_node(spy(&count));
    let end = graph.add_node(EndNode::new());
    graph
        .add_edge(start, Outcome::Always, sun)
        .add_edge(sun, Outcome::Always, end);
    graph.add_group("my taskgroup").add_nodes([sun]);
    graph.add_group("my other taskgroup").add_nodes([sun]);

    let err = expect_validation_error(&mut graph);
    assert!(matches!(err, ValidationError::DuplicateGroupMember { id, .. } if id == sun));
    assert_eq!(count.get(), 0);
}

#[test]
fn distinct_groups_pass() {
    let mut graph = Graphflow::new();
    let start = graph.add_node(StartNode::new());
    let rain = graph.add_node(SetForecast::new("Forecast Rain", "Rain"));
    let sun = graph.add_node(SetForecast::new("Forecast Sun", "Sun"));
    let end = graph.add_node(EndNode::new());
    graph.add_edge(start, Outcome::Always, rain);
    graph.add_group("Forecasting").add_nodes([rain, sun]);
    graph.add_group("Terminals").add_nodes([start, end]);

    let ctx = graph.run(Context::new()).unwrap();
    assert_eq!(ctx.get_str("Forecast"), Some("Rain"));
}

#[test]
fn strict_config_rejects_second_start() {
    let config = RunConfig::from_json(r#"{"strict_terminals": true}"#).unwrap();
    let mut graph = Graphflow::new().with_config(config);
    let first = graph.add_node(StartNode::new());
    let second = graph.add_node(StartNode::new());
    graph.add_node(EndNode::new());

    match expect_validation_error(&mut graph) {
        ValidationError::DuplicateTerminal {
            first: f,
            second: s,
            ..
        } => {
            assert_eq!(f, first);
            assert_eq!(s, second);
        }
        other => panic!("expected DuplicateTerminal, got {:?}", other),
    }
}
