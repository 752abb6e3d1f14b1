//! Errors raised when a move request is rejected.

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal. A correctly wired front end only ever sees
/// `CellOccupied` and `GameAlreadyOver`, and ignores both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside the 3x3 grid.
    #[display("Coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

/// Error returned when a `"row,col"` string does not name a board cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordError {
    /// Not two comma-separated non-negative integers.
    #[display("Expected ROW,COL but got '{input}'")]
    Malformed {
        /// The rejected text.
        input: String,
    },

    /// Well-formed, but outside the 3x3 grid.
    #[display("{_0}")]
    OffBoard(MoveError),
}
