use crate::algorithms::common::{manhattan, SearchStrategy};
use crate::grid::Position;

/// Greedy Best-First search. Orders the frontier by the Manhattan estimate
/// only, ignoring accumulated cost. It usually expands far fewer cells than
/// A* or Dijkstra but the path it commits to is not necessarily the
/// shortest one.
#[derive(Debug, Default)]
pub struct GreedyBestFirst;

impl GreedyBestFirst {
    pub fn new() -> Self {
        GreedyBestFirst
    }
}

impl SearchStrategy for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "greedy_bfs"
    }

    fn priority(&self, _g: u32, cell: Position, target: Position) -> u32 {
        manhattan(cell, target)
    }
}
