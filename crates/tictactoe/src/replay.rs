//! Non-interactive play: feed a list of moves through the controller.

use crate::controller::{CellActivation, Controller};
use crate::view::BoardView;
use anyhow::{Result, bail};
use tictactoe_core::MoveError;
use tracing::{info, instrument};

/// A requested move, unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveArg {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl std::str::FromStr for MoveArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL but got '{}'", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("bad number '{}' in '{}': {}", part.trim(), s, e))
        };
        Ok(Self {
            row: parse(row)?,
            col: parse(col)?,
        })
    }
}

/// Plays `moves` on a fresh game exactly as clicks would be handled.
///
/// Occupied cells and moves after the end are skipped like ignored clicks.
///
/// # Errors
///
/// Fails on the first off-board move.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[MoveArg]) -> Result<BoardView> {
    let mut controller = Controller::default();

    for (i, mv) in moves.iter().enumerate() {
        if let CellActivation::Ignored(err @ MoveError::InvalidCoordinate { .. }) =
            controller.on_cell_activated(mv.row, mv.col)
        {
            bail!("move {} rejected: {}", i + 1, err);
        }
    }

    let view = controller.view();
    info!(status = ?view.status(), "Replay finished");
    Ok(view)
}
