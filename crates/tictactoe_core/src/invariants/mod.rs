//! Consistency rules every reachable [`GameState`](crate::GameState) obeys.
//!
//! Two rules cover the whole state: [`MarkBalanceInvariant`] ties the mark
//! counts to the player on move, and [`StatusConsistentInvariant`] ties the
//! status to what is on the board. `apply_move` debug-asserts both after
//! every placement, and deserialization refuses snapshots that break them.

pub mod mark_balance;
pub mod status_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// One consistency rule over a game state.
pub trait Invariant<S> {
    /// True when `state` satisfies the rule.
    fn holds(state: &S) -> bool;

    /// Short sentence naming the rule, used in violation reports.
    fn description() -> &'static str;
}

/// A rule that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Which rule failed.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation report.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several rules checked in one pass.
pub trait InvariantSet<S> {
    /// Returns every rule that fails, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Both rules for [`GameState`](crate::GameState).
pub type GameInvariants = (MarkBalanceInvariant, StatusConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, GameStatus, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        // O to move on an empty board, and a bogus winner.
        game.current_player = Player::O;
        game.status = GameStatus::Won(Player::X);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
