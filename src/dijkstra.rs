use clap::ValueEnum;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::GraphError;
use crate::graph::{Cost, Edge, Graph, VertexId};
use crate::priority_queue::IndexedMinHeap;

/// How the queue copes with distances that shrink after insertion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Every vertex is queued up front; relaxed vertices are moved in place.
    #[default]
    Indexed,
    /// Relaxed vertices are re-pushed; stale pops are skipped.
    Lazy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    pub vertices: Vec<String>,
    pub cost: Cost,
}

impl ShortestPath {
    /// False when the destination was never reached. `vertices` is then just `[dest]`.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: OrderedFloat<Cost>,
    node_id: VertexId,
}

// Min-heap by cost
impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct RunStats {
    settled: usize,
    relaxed: usize,
    stale: usize,
}

pub fn shortest_path(graph: &mut Graph, source: &str, dest: &str) -> Result<ShortestPath, GraphError> {
    shortest_path_with(graph, source, dest, Strategy::default())
}

pub fn shortest_path_with(
    graph: &mut Graph,
    source: &str,
    dest: &str,
    strategy: Strategy,
) -> Result<ShortestPath, GraphError> {
    graph.vertex_id(dest)?;
    run(graph, source, strategy)?;
    path_to(graph, source, dest)
}

/// Dijkstra from `source` to every vertex. Distances and predecessors are left on the
/// graph's vertices; unreachable vertices keep `Cost::INFINITY`.
pub fn run(graph: &mut Graph, source: &str, strategy: Strategy) -> Result<(), GraphError> {
    let start = graph.vertex_id(source)?;
    graph.reset();
    graph.vertex_mut(start).distance = 0.0;
    graph.set_origin(start);

    let stats = match strategy {
        Strategy::Indexed => run_indexed(graph),
        Strategy::Lazy => run_lazy(graph, start),
    };
    debug!(
        "dijkstra ({:?}) from {}: {} settled, {} relaxations, {} stale pops",
        strategy, source, stats.settled, stats.relaxed, stats.stale
    );
    Ok(())
}

fn run_indexed(graph: &mut Graph) -> RunStats {
    let mut stats = RunStats::default();
    let mut queue = IndexedMinHeap::with_capacity(graph.len());
    for (id, v) in graph.vertices().enumerate() {
        queue.push(id, OrderedFloat(v.distance));
    }

    while let Some((u, OrderedFloat(cost))) = queue.pop() {
        // Everything still queued is unreachable.
        if cost.is_infinite() {
            break;
        }
        stats.settled += 1;
        for k in 0..graph.edges_of(u).len() {
            let edge = graph.edges_of(u)[k];
            if let Some(next_cost) = relax(graph, u, cost, edge) {
                queue.decrease_key(&edge.dest, OrderedFloat(next_cost));
                stats.relaxed += 1;
            }
        }
    }
    stats
}

fn run_lazy(graph: &mut Graph, start: VertexId) -> RunStats {
    let mut stats = RunStats::default();
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: OrderedFloat(0.0), node_id: start });

    while let Some(State { cost, node_id }) = heap.pop() {
        if cost.0 > graph.vertex_by_id(node_id).distance {
            stats.stale += 1;
            continue;
        }
        stats.settled += 1;
        for k in 0..graph.edges_of(node_id).len() {
            let edge = graph.edges_of(node_id)[k];
            if let Some(next_cost) = relax(graph, node_id, cost.0, edge) {
                heap.push(State { cost: OrderedFloat(next_cost), node_id: edge.dest });
                stats.relaxed += 1;
            }
        }
    }
    stats
}

/// Returns the new distance of `edge.dest` if going through `u` improved it.
/// Sums saturate at `Cost::MAX` so that only unreached vertices are infinite.
fn relax(graph: &mut Graph, u: VertexId, cost: Cost, edge: Edge) -> Option<Cost> {
    let next_cost = (cost + edge.weight).min(Cost::MAX);
    let v = graph.vertex_mut(edge.dest);
    if next_cost < v.distance {
        trace!("relax {} via {}: {} -> {}", v.name, u, v.distance, next_cost);
        v.distance = next_cost;
        v.predecessor = Some(u);
        Some(next_cost)
    } else {
        None
    }
}

/// Rebuilds the path to `dest` from the predecessor links of the last `run`, which must
/// have started at `source`.
pub fn path_to(graph: &Graph, source: &str, dest: &str) -> Result<ShortestPath, GraphError> {
    let start = graph.vertex_id(source)?;
    let end = graph.vertex_id(dest)?;
    if graph.origin() != Some(start) {
        return Err(GraphError::NotRunFrom(source.to_string()));
    }

    let mut vertices = Vec::new();
    let mut cur = Some(end);
    while let Some(id) = cur {
        let v = graph.vertex_by_id(id);
        vertices.push(v.name.clone());
        if id == start {
            break;
        }
        cur = v.predecessor;
    }
    vertices.reverse();

    Ok(ShortestPath {
        vertices,
        cost: graph.vertex_by_id(end).distance,
    })
}
