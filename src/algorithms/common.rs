use crate::grid::Position;

/// Behavior that distinguishes one search strategy from another. The shared
/// traversal loop in [`crate::search`] drives the expansion; a strategy only
/// decides how edge costs and frontier priorities are computed. Ties are
/// broken by a fixed crate-wide policy (lower g-cost, then insertion order)
/// owned by the frontier, so every strategy is reproducible on identical
/// input.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    /// Cost of stepping between two adjacent cells. Constant on this grid
    /// model, kept overridable for weighted variants.
    fn edge_cost(&self, _from: Position, _to: Position) -> u32 {
        1
    }

    /// Ordering key pushed into the frontier for a cell reached with
    /// accumulated cost `g`.
    fn priority(&self, g: u32, cell: Position, target: Position) -> u32;
}

/// Manhattan distance. Admissible and consistent for unit-cost orthogonal
/// moves, so it never overestimates the remaining cost.
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(0, 0), Position::new(4, 4)), 8);
        assert_eq!(manhattan(Position::new(3, 1), Position::new(1, 2)), 3);
        assert_eq!(manhattan(Position::new(2, 2), Position::new(2, 2)), 0);
    }
}
