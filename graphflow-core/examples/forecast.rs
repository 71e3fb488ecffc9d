//! Forecast the weather from the state of the sky, then print the DOT
//! diagrams of the graph and of the path taken.
//!
//! ```bash
//! RUST_LOG=graphflow_core=debug cargo run -p graphflow-core --example forecast -- Cloudy
//! ```

use graphflow_core::render::{render_graph, render_path_through_graph};
use graphflow_core::{Context, EndNode, FnNode, GraphError, Graphflow, Outcome, StartNode};
use tracing_subscriber::EnvFilter;

fn forecast(name: &'static str, value: &'static str) -> FnNode {
    FnNode::new(name, move |ctx: &mut Context| {
        ctx.set("Forecast", value);
        Ok(Outcome::Always)
    })
}

fn build() -> Graphflow {
    let mut graph = Graphflow::new();

    let start = graph.add_node(StartNode::new());
    let cloudy = graph.add_node(FnNode::new("Is the sky cloudy?", |ctx: &mut Context| {
        let sky: String = ctx.get_as("Sky")?;
        Ok(if sky == "Cloudy" { Outcome::Yes } else { Outcome::No })
    }));
    // Deliberately left without edges.
    let fog = graph.add_node(forecast("Forecast Fog", "Fog"));
    let rain = graph.add_node(forecast("Forecast Rain", "Rain"));
    let sun = graph.add_node(forecast("Forecast Sun", "Sun"));
    let end = graph.add_node(EndNode::new());

    graph
        .add_edge(start, Outcome::Always, cloudy)
        .add_edge(cloudy, Outcome::Yes, rain)
        .add_edge(cloudy, Outcome::No, sun)
        .add_edge(rain, Outcome::Always, end)
        .add_edge(sun, Outcome::Always, end);

    graph.add_group("Forecasting").add_nodes([fog, rain, sun]);

    graph
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sky = std::env::args().nth(1).unwrap_or_else(|| "Cloudy".to_string());
    let mut graph = build();

    let ctx = graph.run(Context::new().with("Sky", sky).with("Forecast", ""))?;
    println!("Successfully forecasted: {}", ctx.get_str("Forecast").unwrap_or("nothing"));

    println!("\n{}", render_graph(&graph));
    println!(
        "{}",
        render_path_through_graph(&mut graph, Context::new(), ["Sky"])?
    );

    Ok(())
}
