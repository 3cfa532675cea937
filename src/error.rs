use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("no run from {0}; distances on the graph belong to another source")]
    NotRunFrom(String),
}

/// Errors raised while reading the adjacency-list format. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: cannot parse weight {token:?}")]
    InvalidWeight { line: usize, token: String },

    #[error("line {line}: destination {dest} has no weight")]
    MissingWeight { line: usize, dest: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}
