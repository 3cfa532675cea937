use fnv::FnvHashMap;

use crate::error::GraphError;

pub type VertexId = usize;
pub type Cost = f64;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub name: String,
    pub distance: Cost,
    pub predecessor: Option<VertexId>,
}

impl Vertex {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            distance: Cost::INFINITY,
            predecessor: None,
        }
    }

    fn reset(&mut self) {
        self.distance = Cost::INFINITY;
        self.predecessor = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub dest: VertexId,
    pub weight: Cost,
}

/// Directed, weighted graph keyed by vertex name.
///
/// Vertices live in an arena and are addressed by `VertexId`; edges only hold ids,
/// so every destination resolves to a vertex of the same graph.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Vec<Edge>>,
    index: FnvHashMap<String, VertexId>,
    origin: Option<VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Inserts `name` with infinite distance and no predecessor. Idempotent.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.edges.push(Vec::new());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn add_edge(&mut self, source: &str, dest: &str, weight: Cost) -> Result<(), GraphError> {
        let u = self.vertex_id(source)?;
        let v = self.vertex_id(dest)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: source.to_string(),
                to: dest.to_string(),
                weight,
            });
        }
        self.edges[u].push(Edge { dest: v, weight });
        Ok(())
    }

    pub fn vertex_id(&self, name: &str) -> Result<VertexId, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    pub fn vertex(&self, name: &str) -> Result<&Vertex, GraphError> {
        Ok(&self.vertices[self.vertex_id(name)?])
    }

    pub fn vertex_by_id(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id]
    }

    /// Outgoing edges of `name` in insertion order.
    pub fn edges_from(&self, name: &str) -> Result<&[Edge], GraphError> {
        Ok(self.edges_of(self.vertex_id(name)?))
    }

    pub fn edges_of(&self, id: VertexId) -> &[Edge] {
        &self.edges[id]
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Source of the run whose distances are currently stored, if any.
    pub fn origin(&self) -> Option<VertexId> {
        self.origin
    }

    pub(crate) fn set_origin(&mut self, id: VertexId) {
        self.origin = Some(id);
    }

    /// Clears distance and predecessor on every vertex.
    pub fn reset(&mut self) {
        self.origin = None;
        for v in self.vertices.iter_mut() {
            v.reset();
        }
    }
}
