use rustc_hash::FxHashSet;

use crate::grid::{CellState, Grid, Position};
use crate::runner::StrategyRun;

/// Print the per-strategy comparison table followed by a short analysis, in
/// the order the strategies were selected.
pub fn print_comparison(runs: &[StrategyRun]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<12} {:<7} {:<12} {:<7} {:<9} {:<12}",
        "Algorithm", "Found", "Path cells", "Edges", "Visited", "Time"
    );
    println!("{}", "-".repeat(62));

    for run in runs {
        let found_str = if run.result.found { "yes" } else { "no" };
        let path_cells = if run.result.found {
            run.result.path.len().to_string()
        } else {
            "-".to_string()
        };
        let edges = if run.result.found {
            run.result.path_edges().to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<12} {:<7} {:<12} {:<7} {:<9} {:<12}",
            run.kind.name(),
            found_str,
            path_cells,
            edges,
            run.result.visited.len(),
            format!("{:.2?}", run.result.elapsed)
        );
    }

    let successful: Vec<&StrategyRun> = runs.iter().filter(|run| run.result.found).collect();
    if successful.is_empty() {
        println!("\nNo algorithm found a path.");
        return;
    }

    println!("\n=== PERFORMANCE ANALYSIS ===");
    if let Some(shortest) = successful.iter().min_by_key(|run| run.result.path.len()) {
        println!(
            "Shortest path: {} ({} cells)",
            shortest.kind.name(),
            shortest.result.path.len()
        );
    }
    if let Some(leanest) = runs.iter().min_by_key(|run| run.result.visited.len()) {
        println!(
            "Fewest cells visited: {} ({})",
            leanest.kind.name(),
            leanest.result.visited.len()
        );
    }
    if let Some(fastest) = runs.iter().min_by_key(|run| run.result.elapsed) {
        println!(
            "Fastest: {} ({:.2?})",
            fastest.kind.name(),
            fastest.result.elapsed
        );
    }
}

/// Print the grid with one strategy's search overlaid. Path cells win over
/// visited cells; endpoints and obstacles always show through.
pub fn print_overlay(grid: &Grid, run: &StrategyRun) {
    let path: FxHashSet<Position> = run.result.path.iter().copied().collect();
    let visited: FxHashSet<Position> = run.result.visited.iter().copied().collect();

    println!();
    println!("--- {} ---", run.kind.name());
    println!("Legend: S=Start, T=Target, #=Obstacle, *=Path, +=Visited, .=Free");

    print!("   ");
    for col in 0..grid.width() {
        print!("{:2}", col % 10);
    }
    println!();

    for row in 0..grid.height() {
        print!("{:2} ", row);
        for col in 0..grid.width() {
            let pos = Position::new(row, col);
            let state = grid.state(pos).unwrap_or(CellState::Free);
            let glyph = match state {
                CellState::Start => 'S',
                CellState::Target => 'T',
                CellState::Obstacle => '#',
                CellState::Free if path.contains(&pos) => '*',
                CellState::Free if visited.contains(&pos) => '+',
                CellState::Free => '.',
            };
            print!("{} ", glyph);
        }
        println!();
    }
}
