//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Three cells that win the game when they share a mark.
pub type Line = [Coord; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Returns the first line, in table order, completed by `player`.
///
/// Only the player who just moved can have completed a line, so move
/// handling never needs to look at the opponent.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let mark = Cell::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|coord| board.get(*coord) == mark))
}

/// Checks both players for a completed line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Player::iter().find_map(|player| winning_line(board, player).map(|line| (player, line)))
}
