use std::sync::atomic::AtomicBool;

use log::debug;

use crate::algorithms::StrategyKind;
use crate::error::SearchError;
use crate::grid::{CellState, Grid, Position};
use crate::search::{search_cancellable, RunResult};

/// One strategy's outcome within a comparison.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub kind: StrategyKind,
    pub result: RunResult,
}

/// Run every selected strategy against the same grid snapshot and collect
/// one result per strategy, in selection order. Duplicate selections
/// collapse to the first occurrence. Fails before any search work if the
/// endpoints are unusable; each strategy then runs to completion with its
/// own private node table and frontier.
pub fn compare(
    grid: &Grid,
    start: Option<Position>,
    target: Option<Position>,
    kinds: &[StrategyKind],
) -> Result<Vec<StrategyRun>, SearchError> {
    let cancel = AtomicBool::new(false);
    compare_cancellable(grid, start, target, kinds, &cancel)
}

/// Like [`compare`], but threads a cancellation flag through to every
/// traversal loop.
pub fn compare_cancellable(
    grid: &Grid,
    start: Option<Position>,
    target: Option<Position>,
    kinds: &[StrategyKind],
    cancel: &AtomicBool,
) -> Result<Vec<StrategyRun>, SearchError> {
    let (start, target) = validate_endpoints(grid, start, target)?;

    let mut runs: Vec<StrategyRun> = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        if runs.iter().any(|run| run.kind == kind) {
            continue;
        }
        let strategy = kind.build();
        let result = search_cancellable(grid, start, target, strategy.as_ref(), cancel);
        debug!(
            "{}: found={} path={} visited={} elapsed={:.2?}",
            kind.name(),
            result.found,
            result.path.len(),
            result.visited.len(),
            result.elapsed
        );
        runs.push(StrategyRun { kind, result });
    }
    Ok(runs)
}

/// Check that both endpoints are set, in bounds, distinct and traversable.
pub fn validate_endpoints(
    grid: &Grid,
    start: Option<Position>,
    target: Option<Position>,
) -> Result<(Position, Position), SearchError> {
    let start = start.ok_or(SearchError::InvalidEndpoints {
        reason: "start is not set",
    })?;
    let target = target.ok_or(SearchError::InvalidEndpoints {
        reason: "target is not set",
    })?;
    if grid.state(start)? == CellState::Obstacle {
        return Err(SearchError::InvalidEndpoints {
            reason: "start lies on an obstacle",
        });
    }
    if grid.state(target)? == CellState::Obstacle {
        return Err(SearchError::InvalidEndpoints {
            reason: "target lies on an obstacle",
        });
    }
    if start == target {
        return Err(SearchError::InvalidEndpoints {
            reason: "start and target are the same cell",
        });
    }
    Ok((start, target))
}
