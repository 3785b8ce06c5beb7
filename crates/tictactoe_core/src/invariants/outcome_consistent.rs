//! Outcome consistency: the stored outcome matches the board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: re-evaluating the board yields the stored outcome.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        rules::outcome_of(game.board()) == game.outcome()
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}
