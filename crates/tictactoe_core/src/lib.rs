//! Tic-tac-toe game logic.
//!
//! A pure, I/O-free core: a 3x3 board, alternating turns, win/draw
//! detection and restart. Front ends drive it through [`Session`], which
//! owns the [`GameState`] and notifies subscribers after every change.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Outcome, Player, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.place_mark(index);
//! }
//! assert_eq!(session.state().outcome(), Outcome::Win(Player::X));
//! assert_eq!(session.state().status().to_string(), "Winner: Player 1 (X)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, Placement};
pub use game::GameState;
pub use outcome::{Outcome, Status};
pub use position::Position;
pub use session::{GameEvent, Session, SubscriptionId};
pub use types::{Board, Player, Square};
