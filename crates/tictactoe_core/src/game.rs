//! The turn/board state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{IgnoreReason, Placement};
#[cfg(debug_assertions)]
use crate::invariants::{self, MonotonicBoardInvariant};
use crate::{Board, Outcome, Player, Position, Square, Status, rules};

/// Complete game state.
///
/// Only the board, the player to move and the outcome are stored. The
/// status line is derived on demand by [`GameState::status`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Meaningless once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Derived status line.
    pub fn status(&self) -> Status {
        Status::derive(self.outcome, self.turn)
    }

    /// Empty squares, or none if the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Places the current player's mark at a board index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 0-8. Callers only ever hand over indices
    /// of drawn cells, so anything else is a bug.
    pub fn place_mark(&mut self, index: usize) -> Placement {
        let Some(pos) = Position::from_index(index) else {
            panic!("board index {index} out of range 0..9");
        };
        self.place(pos)
    }

    /// Places the current player's mark at a position.
    ///
    /// Requests on an occupied square or after the game ended leave the
    /// state untouched and report why.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.is_over() {
            debug!("Ignoring mark: game is over");
            return Placement::Ignored(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring mark: square occupied");
            return Placement::Ignored(IgnoreReason::Occupied(pos));
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        self.turn = player.opponent();
        self.outcome = rules::outcome_of(&self.board);

        info!(position = %pos, outcome = ?self.outcome, "Mark placed");

        #[cfg(debug_assertions)]
        {
            debug_assert!(
                MonotonicBoardInvariant::holds(&before, &self.board),
                "{}",
                MonotonicBoardInvariant::description()
            );
            invariants::assert_invariants(self);
        }

        Placement::Placed {
            player,
            position: pos,
        }
    }

    /// Resets to the initial state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    /// Hands raw field access to invariant tests so they can build states
    /// the engine would never produce.
    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, f: impl FnOnce(&mut Board, &mut Player, &mut Outcome)) {
        f(&mut self.board, &mut self.turn, &mut self.outcome);
    }
}
