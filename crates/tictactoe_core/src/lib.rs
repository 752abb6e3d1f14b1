//! Tic-tac-toe game logic.
//!
//! [`GameState`] is the single source of truth for a game: it validates
//! moves, alternates turns, detects wins and draws, and resets. It does no
//! I/O. Front ends drive it with one synchronous call per user event and
//! re-render from its accessors afterwards.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.apply_move(row, col)?;
//! }
//! assert_eq!(game.apply_move(0, 2)?, GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{MoveError, ParseCoordError};
pub use game::GameState;
pub use rules::Line;
pub use types::{BOARD_SIZE, Board, Cell, Coord, GameStatus, Player};
