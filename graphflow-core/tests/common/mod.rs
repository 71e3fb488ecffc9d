//! Weather-forecast tasks shared by the integration tests.

#![allow(dead_code)]

use graphflow_core::{Context, EndNode, Graphflow, Node, NodeError, NodeId, Outcome, StartNode, TaskState};

/// Reads `Sky` and answers YES when it is `"Cloudy"`.
#[derive(Default)]
pub struct IsTheSkyCloudy {
    state: TaskState,
}

impl Node for IsTheSkyCloudy {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn name(&self) -> &str {
        "Is the sky cloudy?"
    }

    fn execute(&mut self, ctx: &mut Context) -> Result<(), NodeError> {
        let sky: String = ctx.get_as("Sky")?;
        self.set_outcome(if sky == "Cloudy" { Outcome::Yes } else { Outcome::No });
        Ok(())
    }
}

/// Sets `Forecast` to a fixed value.
pub struct SetForecast {
    state: TaskState,
    name: &'static str,
    forecast: &'static str,
}

impl SetForecast {
    pub fn new(name: &'static str, forecast: &'static str) -> Self {
        Self {
            state: TaskState::new(),
            name,
            forecast,
        }
    }
}

impl Node for SetForecast {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn name(&self) -> &str {
        self.name
    }

    fn execute(&mut self, ctx: &mut Context) -> Result<(), NodeError> {
        ctx.set("Forecast", self.forecast);
        Ok(())
    }
}

/// Handles of the forecast graph.
pub struct Forecast {
    pub start: NodeId,
    pub cloudy: NodeId,
    pub fog: NodeId,
    pub rain: NodeId,
    pub sun: NodeId,
    pub end: NodeId,
}

/// Start -> cloudy? -YES-> rain -> End, -NO-> sun -> End.
///
/// `fog` is registered but left without edges.
pub fn forecast_graph() -> (Graphflow, Forecast) {
    let mut graph = Graphflow::new();
    let ids = Forecast {
        start: graph.add_node(StartNode::new()),
        cloudy: graph.add_node(IsTheSkyCloudy::default()),
        fog: graph.add_node(SetForecast::new("Forecast Fog", "Fog")),
        rain: graph.add_node(SetForecast::new("Forecast Rain", "Rain")),
        sun: graph.add_node(SetForecast::new("Forecast Sun", "Sun")),
        end: graph.add_node(EndNode::new()),
    };
    graph
        .add_edge(ids.start, Outcome::Always, ids.cloudy)
        .add_edge(ids.cloudy, Outcome::Yes, ids.rain)
        .add_edge(ids.cloudy, Outcome::No, ids.sun)
        .add_edge(ids.rain, Outcome::Always, ids.end)
        .add_edge(ids.sun, Outcome::Always, ids.end);
    (graph, ids)
}

pub fn sky(value: &str) -> Context {
    Context::new().with("Sky", value).with("Forecast", "")
}
