use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use graph_matrix_editor::{AdjacencyRule, Direction, EditorConfig, GraphModel};

#[derive(Parser)]
#[command(
    name = "graph_matrix_editor",
    about = "Builds a sample graph and prints its adjacency matrix"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Editor config file (JSON); supplies the adjacency rule
    #[arg(long)]
    config: Option<PathBuf>,

    /// Match directed edges only toward their arrowhead, regardless of the config
    #[arg(long)]
    directional: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let json = match cli.format.as_str() {
        "text" => false,
        "json" => true,
        other => bail!("Unknown format: {} (expected text or json)", other),
    };

    let config = EditorConfig::load_or_default(cli.config.as_deref())?;
    let rule = if cli.directional {
        AdjacencyRule::Directional
    } else {
        config.adjacency_rule
    };

    let graph = build_sample(rule)?;
    let matrix = graph.create_matrix();

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!("Graph Matrix Editor - sample graph ({:?} rule)", rule);
    println!("=============================================\n");
    println!("  └─ Vertices: {}", graph.vertex_count());
    println!("  └─ Loops: {}", graph.loop_count());
    println!("  └─ Edges: {}", graph.edge_count());
    println!("  └─ Events logged: {}", graph.events().len());

    println!("\nAdjacency matrix:\n");
    println!("{}", matrix);

    if !matrix.is_symmetric() {
        println!("\n(directed edges make the matrix asymmetric)");
    }

    Ok(())
}

/// Four vertices, a loop, and one edge of each direction
fn build_sample(rule: AdjacencyRule) -> Result<GraphModel> {
    let mut graph = GraphModel::with_rule(rule);

    let positions = [(100.0, 100.0), (300.0, 100.0), (200.0, 250.0), (400.0, 300.0)];
    let mut ids = Vec::new();
    for (x, y) in positions {
        if let Some(id) = graph.create_vertex(x, y) {
            ids.push(id);
        }
    }
    let &[a, b, c, d] = ids.as_slice() else {
        bail!("Sample vertices overlap");
    };

    graph.toggle_loop(a, true)?;
    graph.create_edge(a, b, Some(3), Some(Direction::Undirected))?;
    graph.create_edge(b, c, Some(5), Some(Direction::TowardSecond))?;
    graph.create_edge(c, a, Some(2), Some(Direction::TowardFirst))?;
    graph.create_edge(c, d, None, None)?;

    Ok(graph)
}
