use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::error::ParseError;
use crate::graph::Graph;

/// Reads an adjacency-list file: `<vertex> <dest> <weight> <dest> <weight> ...` per line.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let graph = parse_graph(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(
        "Graph: {} vertices, {} directed edges from {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

pub fn parse_graph(text: &str) -> Result<Graph, ParseError> {
    let lines: Vec<(usize, Vec<&str>)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect();

    let mut graph = Graph::new();

    // Pass 1: every line head is a vertex, so destinations may refer forward.
    for (_, tokens) in &lines {
        graph.add_vertex(tokens[0]);
    }

    // Pass 2: edges
    for (line, tokens) in &lines {
        let source = tokens[0];
        for pair in tokens[1..].chunks(2) {
            let dest = pair[0];
            let token = pair.get(1).ok_or_else(|| ParseError::MissingWeight {
                line: *line,
                dest: dest.to_string(),
            })?;
            let weight: f64 = token.parse().map_err(|_| ParseError::InvalidWeight {
                line: *line,
                token: token.to_string(),
            })?;
            graph
                .add_edge(source, dest, weight)
                .map_err(|err| ParseError::Graph { line: *line, source: err })?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::io::Write;

    #[test]
    fn parses_adjacency_lines() {
        let g = parse_graph("LAX SFO 337 JFK 2475\nSFO JFK 2586\nJFK\n").unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 3);

        let edges = g.edges_from("LAX").unwrap();
        assert_eq!(edges[0].dest, g.vertex_id("SFO").unwrap());
        assert_eq!(edges[0].weight, 337.0);
        assert_eq!(edges[1].dest, g.vertex_id("JFK").unwrap());
        assert!(g.edges_from("JFK").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_and_extra_whitespace_are_ignored() {
        let g = parse_graph("\n  A   B 1.5\t C 2\n\nB\nC\n\n").unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.edges_from("A").unwrap().len(), 2);
        assert_eq!(g.edges_from("A").unwrap()[0].weight, 1.5);
    }

    #[test]
    fn malformed_weight_is_an_error() {
        assert_eq!(
            parse_graph("A B x1\nB\n").unwrap_err(),
            ParseError::InvalidWeight { line: 1, token: "x1".to_string() }
        );
    }

    #[test]
    fn truncated_line_is_an_error() {
        assert_eq!(
            parse_graph("A\nB A 1 A\n").unwrap_err(),
            ParseError::MissingWeight { line: 2, dest: "A".to_string() }
        );
    }

    #[test]
    fn undeclared_destination_is_an_error() {
        assert_eq!(
            parse_graph("A B 1\n").unwrap_err(),
            ParseError::Graph {
                line: 1,
                source: GraphError::UnknownVertex("B".to_string()),
            }
        );
    }

    #[test]
    fn negative_weight_is_an_error() {
        assert!(matches!(
            parse_graph("A B -3\nB\n"),
            Err(ParseError::Graph { line: 1, source: GraphError::InvalidWeight { .. } })
        ));
    }

    #[test]
    fn repeated_head_merges_edges() {
        let g = parse_graph("A B 1\nB\nA B 2\n").unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.edges_from("A").unwrap().len(), 2);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A B 1 C 5").unwrap();
        writeln!(file, "B C 2").unwrap();
        writeln!(file, "C").unwrap();

        let mut g = read_graph(file.path()).unwrap();
        let path = crate::dijkstra::shortest_path(&mut g, "A", "C").unwrap();
        assert_eq!(path.vertices, vec!["A", "B", "C"]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_graph("/nonexistent/airports.txt").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/airports.txt"));
    }
}
