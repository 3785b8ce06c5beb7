//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate turns.
///
/// X always moves first and the turn flips on every accepted mark, so X has
/// either as many marks as O (X to move) or exactly one more (O to move).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let xs = game.board().marks_of(Player::X);
        let os = game.board().marks_of(Player::O);

        match game.turn() {
            Player::X => xs == os,
            Player::O => xs == os + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for i in [0, 4, 2, 6, 8] {
            game.place_mark(i);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.place_mark(0);
        game.corrupt_for_test(|_, turn, _| *turn = Player::X);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
