use anyhow::{Context, Result};
use clap::Parser;
use csv::Writer;
use log::info;
use std::process::ExitCode;
use std::time::SystemTime;

use waypath::dijkstra::{self, Strategy};
use waypath::graph::Graph;
use waypath::loader;

#[derive(Parser, Debug)]
#[command(name = "route")]
#[command(about = "Load an adjacency-list file and find the cheapest path between two airport codes.", long_about = None)]
struct Cli {
    /// Source airport code
    source: String,

    /// Destination airport code
    destination: String,

    /// Path to the adjacency-list file
    #[arg(short, long, env = "WAYPATH_GRAPH", default_value_t = String::from("airports.txt"))]
    graph: String,

    #[arg(short, long, value_enum, default_value_t = Strategy::Indexed)]
    strategy: Strategy,

    /// Output CSV (vertex, distance) for every vertex, sorted by distance
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable vertices in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn write_distances(graph: &Graph, out_path: &str, include_unreachable: bool) -> Result<()> {
    let mut wtr =
        Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
    wtr.write_record(["vertex", "distance"])?;

    let mut vertices: Vec<_> = graph.vertices().collect();
    vertices.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.name.cmp(&b.name)));

    let mut written = 0;
    for v in vertices {
        if v.distance.is_finite() || include_unreachable {
            let val = if v.distance.is_finite() {
                format!("{:.6}", v.distance)
            } else {
                String::from("inf")
            };
            wtr.write_record([v.name.as_str(), val.as_str()])?;
            written += 1;
        }
    }
    wtr.flush()?;
    info!("Wrote distances for {} vertices to {}", written, out_path);
    Ok(())
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let mut graph = loader::read_graph(&cli.graph)?;

    let now = SystemTime::now();
    let path = dijkstra::shortest_path_with(&mut graph, &cli.source, &cli.destination, cli.strategy)
        .with_context(|| format!("routing {} -> {}", cli.source, cli.destination))?;
    if let Ok(elapsed) = now.elapsed() {
        info!("{:?} dijkstra took {} s", cli.strategy, elapsed.as_secs_f64());
    }

    if let Some(out_path) = &cli.out {
        write_distances(&graph, out_path, cli.include_unreachable)?;
    }

    if !path.is_reachable() {
        println!("no path from {} to {}", cli.source, cli.destination);
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", path.vertices.join(" -> "));
    println!("cost: {}", path.cost);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_sample_airports() {
        let mut graph = loader::read_graph("data/airports.txt").unwrap();
        let path = dijkstra::shortest_path(&mut graph, "LAX", "BOS").unwrap();
        assert_eq!(path.vertices, vec!["LAX", "JFK", "BOS"]);
        assert_eq!(path.cost, 2662.0);

        let path = dijkstra::shortest_path(&mut graph, "LAX", "HNL").unwrap();
        assert!(!path.is_reachable());
    }

    #[test]
    fn both_codes_are_required() {
        assert!(Cli::try_parse_from(["route", "LAX"]).is_err());
        let cli = Cli::try_parse_from(["route", "LAX", "BOS", "--strategy", "lazy"]).unwrap();
        assert_eq!(cli.source, "LAX");
        assert_eq!(cli.destination, "BOS");
        assert_eq!(cli.strategy, Strategy::Lazy);
    }

    #[test]
    fn writes_sorted_distances() {
        let mut graph = loader::parse_graph("A B 2 C 1\nB\nC B 5\nD\n").unwrap();
        dijkstra::run(&mut graph, "A", Strategy::Indexed).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist.csv");
        let out = out.to_str().unwrap();

        write_distances(&graph, out, false).unwrap();
        let text = std::fs::read_to_string(out).unwrap();
        assert_eq!(
            text,
            "vertex,distance\nA,0.000000\nC,1.000000\nB,2.000000\n"
        );

        write_distances(&graph, out, true).unwrap();
        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.ends_with("D,inf\n"));
    }
}
