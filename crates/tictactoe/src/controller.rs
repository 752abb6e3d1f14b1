//! Translates UI events into game-state calls.

use crate::view::BoardView;
use derive_new::new;
use tictactoe_core::{GameState, GameStatus, MoveError};
use tracing::{debug, info, instrument, warn};

/// What became of a cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellActivation {
    /// The mark was placed; carries the resulting status.
    Placed(GameStatus),
    /// The request was rejected and nothing changed.
    Ignored(MoveError),
}

/// Owns the single [`GameState`] and handles front-end events.
///
/// Every handler runs to completion before the next event is read, so no
/// locking is involved.
#[derive(Debug, Clone, new)]
pub struct Controller {
    game: GameState,
}

impl Controller {
    /// A cell was clicked or chosen from the keyboard.
    ///
    /// Occupied cells and finished games are silently ignored. An
    /// off-board coordinate means the front end is miswired and is logged
    /// as a warning.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> CellActivation {
        match self.game.apply_move(row, col) {
            Ok(status) => {
                info!(?status, "Move applied");
                CellActivation::Placed(status)
            }
            Err(err @ MoveError::InvalidCoordinate { .. }) => {
                warn!(error = %err, "Front end sent an off-board cell");
                CellActivation::Ignored(err)
            }
            Err(err) => {
                debug!(error = %err, "Activation ignored");
                CellActivation::Ignored(err)
            }
        }
    }

    /// The reset button was pressed.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) {
        info!("Reset requested");
        self.game.reset();
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> BoardView {
        BoardView::from_game(&self.game)
    }

    /// The game being driven.
    pub fn game(&self) -> &GameState {
        &self.game
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
