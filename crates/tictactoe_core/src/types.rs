//! Core domain types for tic-tac-toe.

use crate::action::{MoveError, ParseCoordError};
use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A validated (row, col) coordinate on the board.
///
/// Holding a `Coord` means both components are in `0..BOARD_SIZE`, including
/// one that was deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Wire form of [`Coord`] before bounds checking.
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = MoveError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl std::str::FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses `"row,col"`, e.g. `"2,0"`. Whitespace around either number is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCoordError::Malformed {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse::<usize>().map_err(|_| malformed())?;
        let col = col.trim().parse::<usize>().map_err(|_| malformed())?;
        Coord::new(row, col).map_err(ParseCoordError::OffBoard)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Returns the cells row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Places a mark. Callers are responsible for checking the cell is empty.
    pub(crate) fn place(&mut self, coord: Coord, player: Player) {
        self.cells[coord.row][coord.col] = Cell::Occupied(player);
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal status.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_rejects_off_board() {
        assert_eq!(
            Coord::new(3, 0),
            Err(MoveError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert!(Coord::new(0, 3).is_err());
        assert!(Coord::new(2, 2).is_ok());
    }

    #[test]
    fn test_coord_all_is_row_major() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
        }
    }

    #[test]
    fn test_coord_from_str() {
        assert_eq!("2,0".parse::<Coord>(), Ok(Coord::at(2, 0)));
        assert_eq!(" 1 , 1 ".parse::<Coord>(), Ok(Coord::at(1, 1)));
        assert_eq!(
            "3,1".parse::<Coord>(),
            Err(ParseCoordError::OffBoard(MoveError::InvalidCoordinate {
                row: 3,
                col: 1
            }))
        );
        assert!(matches!(
            "1;1".parse::<Coord>(),
            Err(ParseCoordError::Malformed { .. })
        ));
        assert!("-1,0".parse::<Coord>().is_err());
        assert!("1,".parse::<Coord>().is_err());
    }

    #[test]
    fn test_board_counts() {
        let mut board = Board::new();
        board.place(Coord::at(0, 0), Player::X);
        board.place(Coord::at(0, 1), Player::X);
        board.place(Coord::at(2, 2), Player::O);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert!(!board.is_full());
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
