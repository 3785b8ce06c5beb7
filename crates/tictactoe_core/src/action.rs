//! What happened when a mark was requested.
//!
//! Placing a mark never fails. A click on an occupied square or after the
//! game ended is simply ignored; these types report which case occurred so
//! callers can log it or show a hint.

use serde::{Deserialize, Serialize};

use crate::{Player, Position};

/// Result of a place-mark request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Placement {
    /// The mark was accepted.
    #[display("{} played {}", player.describe(), position)]
    Placed {
        /// The player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// The request was a no-op.
    #[display("{_0}")]
    Ignored(IgnoreReason),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Why a place-mark request was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
