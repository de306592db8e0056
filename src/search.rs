use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::SearchStrategy;
use crate::frontier::Frontier;
use crate::grid::{Grid, Position};

/// Per-run bookkeeping for a discovered cell: best accumulated cost so far
/// and the predecessor it was reached from. Parents form a tree rooted at
/// the start because a parent is only reassigned together with a strictly
/// lower g-cost.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    g: u32,
    parent: Option<Position>,
}

/// Outcome of a single strategy run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub found: bool,
    /// Cells from start to target inclusive; empty when no path exists.
    pub path: Vec<Position>,
    /// Cells in the order they were finalized, not merely enqueued.
    pub visited: Vec<Position>,
    pub elapsed: Duration,
}

impl RunResult {
    /// Number of edge traversals along the path.
    pub fn path_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `strategy` over `grid` from `start` to `target`.
///
/// Frontier exhaustion is the normal "no path" outcome and is reported as
/// `found = false`, never as an error. Endpoints must be in bounds; the
/// runner validates caller input before getting here.
pub fn search(
    grid: &Grid,
    start: Position,
    target: Position,
    strategy: &dyn SearchStrategy,
) -> RunResult {
    let cancel = AtomicBool::new(false);
    search_cancellable(grid, start, target, strategy, &cancel)
}

/// Like [`search`], but checks `cancel` at the top of every expansion. A
/// cancelled run reports `found = false` with the cells finalized so far.
pub fn search_cancellable(
    grid: &Grid,
    start: Position,
    target: Position,
    strategy: &dyn SearchStrategy,
    cancel: &AtomicBool,
) -> RunResult {
    assert!(grid.in_bounds(start), "start {start} is out of bounds");
    assert!(grid.in_bounds(target), "target {target} is out of bounds");

    let timer = Instant::now();

    let mut frontier = Frontier::new();
    let mut records: FxHashMap<Position, NodeRecord> = FxHashMap::default();
    let mut finalized: FxHashSet<Position> = FxHashSet::default();
    let mut visited = Vec::new();

    records.insert(start, NodeRecord { g: 0, parent: None });
    frontier.push(start, 0, strategy.priority(0, start, target));

    while !cancel.load(Ordering::Relaxed) {
        let Some(entry) = frontier.pop_min() else {
            break;
        };
        // A cheaper route may have finalized this cell after the entry was
        // queued; the stale duplicate is skipped instead of decrease-keyed.
        if finalized.contains(&entry.cell) {
            continue;
        }
        finalized.insert(entry.cell);
        visited.push(entry.cell);

        if entry.cell == target {
            let path = reconstruct(&records, target);
            return RunResult {
                found: true,
                path,
                visited,
                elapsed: timer.elapsed(),
            };
        }

        for neighbor in grid.neighbors(entry.cell) {
            if !grid.is_traversable(neighbor) || finalized.contains(&neighbor) {
                continue;
            }
            let tentative = entry.g.saturating_add(strategy.edge_cost(entry.cell, neighbor));
            let improved = match records.get(&neighbor) {
                Some(rec) => tentative < rec.g,
                None => true,
            };
            if improved {
                records.insert(
                    neighbor,
                    NodeRecord {
                        g: tentative,
                        parent: Some(entry.cell),
                    },
                );
                frontier.push(
                    neighbor,
                    tentative,
                    strategy.priority(tentative, neighbor, target),
                );
            }
        }
    }

    RunResult {
        found: false,
        path: Vec::new(),
        visited,
        elapsed: timer.elapsed(),
    }
}

fn reconstruct(records: &FxHashMap<Position, NodeRecord>, target: Position) -> Vec<Position> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = records.get(&current).and_then(|rec| rec.parent) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::StrategyKind;

    fn run(grid: &Grid, kind: StrategyKind) -> RunResult {
        let start = grid.start().unwrap();
        let target = grid.target().unwrap();
        search(grid, start, target, kind.build().as_ref())
    }

    fn assert_valid_path(grid: &Grid, result: &RunResult) {
        assert!(result.found);
        assert_eq!(result.path.first(), Some(&grid.start().unwrap()));
        assert_eq!(result.path.last(), Some(&grid.target().unwrap()));
        for pair in result.path.windows(2) {
            let dist = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dist, 1, "{} and {} are not adjacent", pair[0], pair[1]);
        }
        for &pos in &result.path {
            assert!(grid.is_traversable(pos), "{pos} is an obstacle");
        }
    }

    #[test]
    fn empty_grid_optimal_lengths() {
        let grid = Grid::from_ascii(
            "S....
             .....
             .....
             .....
             ....T",
        );
        let astar = run(&grid, StrategyKind::AStar);
        let dijkstra = run(&grid, StrategyKind::Dijkstra);
        let greedy = run(&grid, StrategyKind::GreedyBestFirst);

        assert_valid_path(&grid, &astar);
        assert_valid_path(&grid, &dijkstra);
        assert_valid_path(&grid, &greedy);

        assert_eq!(astar.path.len(), 9);
        assert_eq!(dijkstra.path.len(), 9);
        assert!(greedy.path.len() >= 9);
        assert!(astar.visited.len() <= 25);
    }

    #[test]
    fn start_equals_target_is_a_single_cell_path() {
        let grid = Grid::new(4, 4);
        let cell = Position::new(2, 2);
        for kind in StrategyKind::ALL {
            let result = search(&grid, cell, cell, kind.build().as_ref());
            assert!(result.found);
            assert_eq!(result.path, vec![cell]);
            assert_eq!(result.path_edges(), 0);
            assert_eq!(result.visited, vec![cell]);
        }
    }

    #[test]
    fn solid_wall_defeats_every_strategy() {
        let grid = Grid::from_ascii(
            "S#T
             .#.
             .#.",
        );
        for kind in StrategyKind::ALL {
            let result = run(&grid, kind);
            assert!(!result.found, "{} should not find a path", kind.name());
            assert!(result.path.is_empty());
            assert!(!result.visited.is_empty());
        }
    }

    #[test]
    fn exhaustion_visits_every_reachable_cell() {
        let grid = Grid::from_ascii(
            "S#T
             .#.
             .#.",
        );
        let result = run(&grid, StrategyKind::Dijkstra);
        let mut visited = result.visited.clone();
        visited.sort();
        assert_eq!(
            visited,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn paths_route_around_obstacles() {
        let grid = Grid::from_ascii(
            "S....
             .###.
             .#T#.
             .#.#.
             .....",
        );
        for kind in StrategyKind::ALL {
            let result = run(&grid, kind);
            assert_valid_path(&grid, &result);
        }
    }

    #[test]
    fn greedy_detour_is_never_shorter_than_optimal() {
        // The heuristic pulls greedy straight at the target and into the
        // concave pocket, forcing a longer way out.
        let grid = Grid::from_ascii(
            "S......
             .......
             ..###..
             ..#T#..
             ..#.#..
             .......",
        );
        let astar = run(&grid, StrategyKind::AStar);
        let greedy = run(&grid, StrategyKind::GreedyBestFirst);
        assert_valid_path(&grid, &astar);
        assert_valid_path(&grid, &greedy);
        assert!(greedy.path.len() >= astar.path.len());
    }

    #[test]
    fn reruns_are_deterministic() {
        let grid = Grid::generate(12, 12, 30, Some(42));
        for kind in StrategyKind::ALL {
            let first = run(&grid, kind);
            let second = run(&grid, kind);
            assert_eq!(first.found, second.found);
            assert_eq!(first.path, second.path);
            assert_eq!(first.visited, second.visited);
        }
    }

    #[test]
    fn cancelled_search_does_no_work() {
        let grid = Grid::from_ascii(
            "S....
             .....
             ....T",
        );
        let cancel = AtomicBool::new(true);
        let result = search_cancellable(
            &grid,
            grid.start().unwrap(),
            grid.target().unwrap(),
            StrategyKind::AStar.build().as_ref(),
            &cancel,
        );
        assert!(!result.found);
        assert!(result.visited.is_empty());
    }
}
