//! Keyboard mapping for the board screen.

use crossterm::event::KeyCode;
use tictactoe_core::{BOARD_SIZE, Coord};

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    MoveCursor(Coord),
    /// Play at a cell.
    Activate(Coord),
    /// Press the reset button.
    Reset,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIZE - 1)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Decodes a key press.
///
/// Digits 1-9 address cells row-major, like a phone keypad.
pub fn key_action(cursor: Coord, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Coord::ALL.get(digit as usize - 1))
            .map(|coord| Action::Activate(*coord)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
    }

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(
            key_action(at(0, 0), KeyCode::Char('1')),
            Some(Action::Activate(at(0, 0)))
        );
        assert_eq!(
            key_action(at(0, 0), KeyCode::Char('6')),
            Some(Action::Activate(at(1, 2)))
        );
        assert_eq!(key_action(at(0, 0), KeyCode::Char('0')), None);
    }

    #[test]
    fn test_enter_activates_cursor() {
        assert_eq!(
            key_action(at(2, 1), KeyCode::Enter),
            Some(Action::Activate(at(2, 1)))
        );
        assert_eq!(key_action(at(2, 1), KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(key_action(at(2, 1), KeyCode::Esc), Some(Action::Quit));
    }
}
