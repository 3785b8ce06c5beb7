//! Change notification around a [`GameState`].
//!
//! A [`Session`] owns the single game of an interactive run and tells every
//! subscriber about each accepted change, so a front end can redraw without
//! polling.

use std::fmt;

use tracing::{debug, instrument};

use crate::{GameState, Outcome, Placement, Player, Position};

/// Messages sent from the session to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameEvent {
    /// A mark was accepted.
    #[display("{} played {}", player.describe(), position)]
    MarkPlaced {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// The preceding mark ended the game.
    #[display("Game over: {_0:?}")]
    GameOver(Outcome),
    /// The board was cleared.
    #[display("Game restarted")]
    Restarted,
}

/// Handle returned by [`Session::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameEvent, &GameState)>;

/// Owns a game and notifies subscribers when it changes.
#[derive(Default)]
pub struct Session {
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    /// Creates a session around a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a listener called after every accepted change.
    #[instrument(skip(self, listener))]
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent, &GameState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(?id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Places a mark by board index (0-8), notifying on success.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 0-8.
    pub fn place_mark(&mut self, index: usize) -> Placement {
        let placement = self.state.place_mark(index);
        self.announce(placement);
        placement
    }

    /// Places a mark by position, notifying on success.
    pub fn place(&mut self, pos: Position) -> Placement {
        let placement = self.state.place(pos);
        self.announce(placement);
        placement
    }

    /// Restarts the game and notifies.
    pub fn restart(&mut self) {
        self.state.restart();
        self.notify(GameEvent::Restarted);
    }

    fn announce(&mut self, placement: Placement) {
        if let Placement::Placed { player, position } = placement {
            self.notify(GameEvent::MarkPlaced { player, position });
            if self.state.is_over() {
                self.notify(GameEvent::GameOver(self.state.outcome()));
            }
        }
    }

    fn notify(&mut self, event: GameEvent) {
        debug!(%event, listeners = self.listeners.len(), "Notifying listeners");
        for (_, listener) in &mut self.listeners {
            listener(&event, &self.state);
        }
    }
}
