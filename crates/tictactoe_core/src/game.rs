//! The authoritative game state.

use crate::action::MoveError;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::{self, Line};
use crate::types::{Board, Cell, Coord, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// Owns the board, the player to move and the game status. Front ends hold
/// one of these and query it after every call; they never keep a copy of
/// the board themselves.
///
/// Deserializing rejects any snapshot that breaks [`GameInvariants`], so a
/// loaded state behaves exactly like one reached by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Returns the status after the move. A completed line wins for the mover
    /// even when it also fills the board. The turn only passes to the
    /// opponent while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] if `row` or `col` is above 2.
    /// - [`MoveError::GameAlreadyOver`] if the game has been won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The state is untouched on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let coord = Coord::new(row, col)?;

        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        if !self.board.is_empty(coord) {
            return Err(MoveError::CellOccupied { row, col });
        }

        let player = self.current_player;
        self.board.place(coord, player);

        if let Some(line) = rules::winning_line(&self.board, player) {
            info!(%player, ?line, "Line completed");
            self.status = GameStatus::Won(player);
        } else if rules::is_full(&self.board) {
            info!("Board full without a line");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passes");
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after move at {coord}"
        );

        Ok(self.status)
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCoordinate`] if `row` or `col` is above 2.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.board.get(Coord::new(row, col)?))
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn it is (or who just won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<Line> {
        self.status
            .winner()
            .and_then(|player| rules::winning_line(&self.board, player))
    }
}

/// Wire form of [`GameState`] before the invariants are checked.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            current_player: raw.current_player,
            status: raw.status,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let described: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            InvariantViolation::new(described.join("; "))
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
