use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Free,
    Obstacle,
    Start,
    Target,
}

/// A fixed-size occupancy grid. Mutated only between searches; the search
/// engine reads it and never writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
    start: Option<Position>,
    target: Option<Position>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be at least 1x1"
        );
        Grid {
            width,
            height,
            cells: vec![vec![CellState::Free; width]; height],
            start: None,
            target: None,
        }
    }

    /// Generate a grid with random distinct start/target cells and up to
    /// `num_obstacles` obstacles avoiding both. A seed makes the layout
    /// reproducible across runs.
    pub fn generate(width: usize, height: usize, num_obstacles: usize, seed: Option<u64>) -> Self {
        assert!(
            width * height >= 2,
            "grid must have at least two cells for distinct endpoints"
        );
        let mut rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        let mut grid = Grid::new(width, height);

        let start = Position::new(rng.gen_range(0..height), rng.gen_range(0..width));
        let mut target = start;
        while target == start {
            target = Position::new(rng.gen_range(0..height), rng.gen_range(0..width));
        }
        grid.cells[start.row][start.col] = CellState::Start;
        grid.start = Some(start);
        grid.cells[target.row][target.col] = CellState::Target;
        grid.target = Some(target);

        // Place obstacles with bounded attempts so dense requests terminate.
        let mut placed = 0;
        let mut attempts = 0;
        while placed < num_obstacles && attempts < num_obstacles * 3 {
            let pos = Position::new(rng.gen_range(0..height), rng.gen_range(0..width));
            if grid.cells[pos.row][pos.col] == CellState::Free {
                grid.cells[pos.row][pos.col] = CellState::Obstacle;
                placed += 1;
            }
            attempts += 1;
        }
        if placed < num_obstacles {
            debug!(
                "placed {placed} of {num_obstacles} requested obstacles before giving up"
            );
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn state(&self, pos: Position) -> Result<CellState, SearchError> {
        if !self.in_bounds(pos) {
            return Err(SearchError::OutOfBounds {
                cell: pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[pos.row][pos.col])
    }

    /// Whether a search may step onto this cell. Start and target cells are
    /// always traversable.
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] != CellState::Obstacle
    }

    /// In-bounds orthogonal neighbors in fixed order: up, down, left, right.
    /// The order feeds frontier tie-breaking, so it must not change.
    /// Obstacle cells are included; the traversal loop skips them.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as isize, pos.col as isize);

        for (dr, dc) in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let nr = row + dr;
            let nc = col + dc;
            if nr >= 0 && nr < self.height as isize && nc >= 0 && nc < self.width as isize {
                neighbors.push(Position::new(nr as usize, nc as usize));
            }
        }
        neighbors
    }

    /// Flip a free cell to an obstacle or back. No-op on start/target cells.
    pub fn toggle_obstacle(&mut self, pos: Position) -> Result<(), SearchError> {
        match self.state(pos)? {
            CellState::Free => self.cells[pos.row][pos.col] = CellState::Obstacle,
            CellState::Obstacle => self.cells[pos.row][pos.col] = CellState::Free,
            CellState::Start | CellState::Target => {}
        }
        Ok(())
    }

    /// Move the start marker. Clears any obstacle on the chosen cell and
    /// frees the previous start cell. No-op on the target cell, so the
    /// endpoints stay distinct.
    pub fn set_start(&mut self, pos: Position) -> Result<(), SearchError> {
        self.state(pos)?;
        if self.target == Some(pos) {
            return Ok(());
        }
        if let Some(prev) = self.start.take() {
            self.cells[prev.row][prev.col] = CellState::Free;
        }
        self.cells[pos.row][pos.col] = CellState::Start;
        self.start = Some(pos);
        Ok(())
    }

    /// Move the target marker. Same rules as [`Grid::set_start`].
    pub fn set_target(&mut self, pos: Position) -> Result<(), SearchError> {
        self.state(pos)?;
        if self.start == Some(pos) {
            return Ok(());
        }
        if let Some(prev) = self.target.take() {
            self.cells[prev.row][prev.col] = CellState::Free;
        }
        self.cells[pos.row][pos.col] = CellState::Target;
        self.target = Some(pos);
        Ok(())
    }

    /// Reset every cell to free and unset both endpoints.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(CellState::Free);
        }
        self.start = None;
        self.target = None;
    }
}

#[cfg(test)]
impl Grid {
    /// Build a grid from rows of `.` (free), `#` (obstacle), `S` and `T`.
    pub(crate) fn from_ascii(art: &str) -> Grid {
        let rows: Vec<&str> = art
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows[0].chars().count();
        let mut grid = Grid::new(width, height);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged row {r} in grid art");
            for (c, ch) in line.chars().enumerate() {
                let pos = Position::new(r, c);
                match ch {
                    '.' => {}
                    '#' => grid.cells[r][c] = CellState::Obstacle,
                    'S' => {
                        grid.cells[r][c] = CellState::Start;
                        grid.start = Some(pos);
                    }
                    'T' => {
                        grid.cells[r][c] = CellState::Target;
                        grid.target = Some(pos);
                    }
                    _ => panic!("unexpected grid art char {ch:?}"),
                }
            }
        }
        grid
    }
}
