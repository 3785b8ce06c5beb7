//! Single winner invariant: completed lines never belong to both players.

use super::Invariant;
use crate::rules::LINES;
use crate::{GameState, Square};

/// Invariant: at most one player holds completed lines.
///
/// Play stops at the first completed line, so the second player can never
/// complete one of their own afterwards.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let mut winners = LINES.iter().filter_map(|[a, b, c]| {
            let sq = board.get(*a);
            (sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c))
                .then(|| sq.player())
                .flatten()
        });

        match winners.next() {
            Some(first) => winners.all(|p| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has completed a line"
    }
}
