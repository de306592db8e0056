use crate::algorithms::common::SearchStrategy;
use crate::grid::Position;

/// Dijkstra's algorithm. The frontier is ordered by accumulated cost alone,
/// so the grid is explored uniformly outward from the start and returned
/// paths are optimal.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl SearchStrategy for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn priority(&self, g: u32, _cell: Position, _target: Position) -> u32 {
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_accumulated_cost() {
        let strategy = Dijkstra::new();
        let target = Position::new(9, 9);
        assert_eq!(strategy.priority(5, Position::new(0, 0), target), 5);
        assert_eq!(strategy.priority(0, Position::new(8, 8), target), 0);
    }
}
