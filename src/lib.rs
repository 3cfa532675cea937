pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heap_sort;
pub mod loader;
pub mod priority_queue;
