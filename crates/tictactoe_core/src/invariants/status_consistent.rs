//! Status invariant: the recorded status matches the board.

use super::Invariant;
use crate::rules::{check_winner, is_full, winning_line};
use crate::{GameState, GameStatus};

/// Invariant: exactly the status the board implies.
///
/// - `Won(p)`: `p` has a completed line.
/// - `Draw`: the board is full and nobody has a line.
/// - `InProgress`: nobody has a line and at least one cell is empty.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::Won(player) => winning_line(board, player).is_some(),
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
            GameStatus::InProgress => !is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board (win needs a line, draw needs a full board)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;
    use crate::Player;

    #[test]
    fn test_holds_after_draw() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.apply_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_line_violates() {
        let mut game = GameState::new();
        for col in 0..3 {
            game.board.place(Coord::at(0, col), Player::O);
        }
        assert!(!StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut game = GameState::new();
        game.status = GameStatus::Draw;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
