//! Game result classification and the derived status line.

use serde::{Deserialize, Serialize};

use crate::Player;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Human-facing summary of a game, computed on demand.
///
/// Never stored: it is rebuilt from the outcome and turn each time, so it
/// cannot drift from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Game in progress; the player to move.
    #[display("Turn: {}", _0.describe())]
    Turn(Player),
    /// Game won.
    #[display("Winner: {}", _0.describe())]
    Winner(Player),
    /// Game drawn.
    #[display("Draw")]
    Draw,
}

impl Status {
    /// Derives the status from an outcome and the player to move.
    pub fn derive(outcome: Outcome, turn: Player) -> Self {
        match outcome {
            Outcome::InProgress => Status::Turn(turn),
            Outcome::Win(player) => Status::Winner(player),
            Outcome::Draw => Status::Draw,
        }
    }
}
