//! Read-only board snapshot for rendering.

use serde::Serialize;
use tictactoe_core::{BOARD_SIZE, Cell, Coord, GameState, GameStatus, Line, Player};

/// Everything a front end needs to draw one frame.
///
/// Built purely from [`GameState::cell`] and [`GameState::status`] queries;
/// the renderer never reads its own widgets back as state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    status: GameStatus,
    current_player: Player,
    message: String,
    winning_line: Option<Line>,
}

impl BoardView {
    /// Snapshots the game.
    pub fn from_game(game: &GameState) -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for coord in Coord::ALL {
            cells[coord.row()][coord.col()] =
                game.cell(coord.row(), coord.col()).unwrap_or_default();
        }

        let status = game.status();
        let current_player = game.current_player();
        Self {
            cells,
            status,
            current_player,
            message: status_message(status, current_player),
            winning_line: game.winning_line(),
        }
    }

    /// Cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Status line text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Board cells accept input only while the game is running.
    pub fn input_enabled(&self) -> bool {
        !self.status.is_over()
    }

    /// Plain-text board; empty cells show their 1-9 keypad number.
    pub fn board_text(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Occupied(player) => result.push(player.mark()),
                    Cell::Empty => result.push_str(&(row * BOARD_SIZE + col + 1).to_string()),
                }
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// True for the three cells of a winning line.
    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&coord))
    }
}

/// Status line for a game in `status` with `current` to move.
pub fn status_message(status: GameStatus, current: Player) -> String {
    match status {
        GameStatus::InProgress => format!("{}'s Turn", current),
        GameStatus::Won(winner) => format!("{} Wins!", winner),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(GameStatus::InProgress, Player::X), "X's Turn");
        assert_eq!(status_message(GameStatus::InProgress, Player::O), "O's Turn");
        assert_eq!(status_message(GameStatus::Won(Player::O), Player::O), "O Wins!");
        assert_eq!(status_message(GameStatus::Draw, Player::X), "Draw!");
    }

    #[test]
    fn test_view_mirrors_game() {
        let mut game = GameState::new();
        game.apply_move(2, 1).unwrap();

        let view = BoardView::from_game(&game);
        assert_eq!(view.cell(Coord::new(2, 1).unwrap()), Cell::Occupied(Player::X));
        assert_eq!(view.cell(Coord::new(0, 0).unwrap()), Cell::Empty);
        assert_eq!(view.message(), "O's Turn");
        assert!(view.input_enabled());
        assert_eq!(view.board_text(), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|X|9");
    }
}
