//! Mark balance invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameState, GameStatus, Player};

/// Invariant: mark counts and the recorded player agree with strict turns.
///
/// X moves first, so X has either as many marks as O or exactly one more.
/// While the game runs, `current_player` is the player to move. Once it
/// ends, `current_player` is whoever made the last mark (and, for a win,
/// the winner).
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        let x_moved_last = x == o + 1;
        match game.status() {
            GameStatus::InProgress => (game.current_player() == Player::X) == !x_moved_last,
            GameStatus::Won(winner) => {
                winner == game.current_player()
                    && (game.current_player() == Player::X) == x_moved_last
            }
            GameStatus::Draw => (game.current_player() == Player::X) == x_moved_last,
        }
    }

    fn description() -> &'static str {
        "X has the same number of marks as O or one more, and the turn follows the counts"
    }
}
