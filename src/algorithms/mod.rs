use std::fmt;

pub mod a_star;
pub mod common;
pub mod dijkstra;
pub mod greedy_best_first;

pub use common::SearchStrategy;

use a_star::AStar;
use dijkstra::Dijkstra;
use greedy_best_first::GreedyBestFirst;

/// Identifier for a selectable strategy, passed into the comparison runner
/// instead of being read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    AStar,
    Dijkstra,
    GreedyBestFirst,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::AStar,
        StrategyKind::Dijkstra,
        StrategyKind::GreedyBestFirst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::AStar => "a_star",
            StrategyKind::Dijkstra => "dijkstra",
            StrategyKind::GreedyBestFirst => "greedy_bfs",
        }
    }

    pub fn build(&self) -> Box<dyn SearchStrategy> {
        match self {
            StrategyKind::AStar => Box::new(AStar::new()),
            StrategyKind::Dijkstra => Box::new(Dijkstra::new()),
            StrategyKind::GreedyBestFirst => Box::new(GreedyBestFirst::new()),
        }
    }

    /// Parse a comma-separated selection such as `a_star,dijkstra`, or
    /// `all`. Duplicates collapse to the first occurrence.
    pub fn parse_list(input: &str) -> Result<Vec<StrategyKind>, String> {
        if input.trim() == "all" {
            return Ok(Self::ALL.to_vec());
        }
        let mut kinds = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let kind = match token {
                "a_star" => StrategyKind::AStar,
                "dijkstra" => StrategyKind::Dijkstra,
                "greedy_bfs" => StrategyKind::GreedyBestFirst,
                other => {
                    return Err(format!(
                        "unknown algorithm '{}': expected 'a_star', 'dijkstra', 'greedy_bfs', or 'all'",
                        other
                    ))
                }
            };
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            return Err("select at least one algorithm".to_string());
        }
        Ok(kinds)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
