//! Monotonic board invariant: squares never change once set.

use crate::{Board, Square};

/// Invariant over a transition: marked squares are never overwritten or
/// cleared, and at most one empty square becomes marked.
///
/// Unlike the snapshot invariants this compares two boards, so it is
/// checked around each placement rather than through [`super::InvariantSet`].
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    /// Checks the transition `before -> after`.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut newly_marked = 0;
        for (old, new) in before.squares().iter().zip(after.squares()) {
            match (old, new) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, Square::Occupied(_)) => newly_marked += 1,
                (Square::Occupied(_), _) if old != new => return false,
                _ => {}
            }
        }
        newly_marked <= 1
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_single_move_holds() {
        let mut game = GameState::new();
        let before = game.board().clone();
        game.place_mark(4);
        assert!(MonotonicBoardInvariant::holds(&before, game.board()));
    }

    #[test]
    fn test_ignored_move_holds() {
        let mut game = GameState::new();
        game.place_mark(4);
        let before = game.board().clone();
        game.place_mark(4);
        assert!(MonotonicBoardInvariant::holds(&before, game.board()));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut before = Board::new();
        before.set(Position::Center, Square::Occupied(Player::X));
        let mut after = before.clone();
        after.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&before, &after));
    }

    #[test]
    fn test_two_new_marks_violate() {
        let before = Board::new();
        let mut after = Board::new();
        after.set(Position::TopLeft, Square::Occupied(Player::X));
        after.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&before, &after));
    }
}
