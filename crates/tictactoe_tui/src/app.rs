//! Application state and logic.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use tictactoe_core::{GameEvent, GameState, Position, Session};
use tracing::{debug, info, instrument};

use crate::config::Theme;
use crate::input::{Intent, move_cursor};
use crate::layout::{ScreenLayout, Target};

/// What the session listener tells the view.
#[derive(Debug, Default)]
struct Feed {
    dirty: bool,
    message: Option<String>,
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    theme: Theme,
    viewport: Rect,
    feed: Rc<RefCell<Feed>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(theme: Theme) -> Self {
        let feed = Rc::new(RefCell::new(Feed {
            dirty: true,
            message: None,
        }));

        let mut session = Session::new();
        let sink = Rc::clone(&feed);
        session.subscribe(move |event, _state| {
            let mut feed = sink.borrow_mut();
            feed.dirty = true;
            match event {
                GameEvent::MarkPlaced { .. } | GameEvent::Restarted => {
                    feed.message = Some(event.to_string());
                }
                GameEvent::GameOver(outcome) => info!(?outcome, "Game over"),
            }
        });

        Self {
            session,
            cursor: Position::Center,
            theme,
            viewport: Rect::default(),
            feed,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark colours.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Line shown under the status: the last game event.
    pub fn message(&self) -> Option<String> {
        self.feed.borrow().message.clone()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True when the screen is out of date.
    pub fn needs_redraw(&self) -> bool {
        self.feed.borrow().dirty
    }

    /// Records the area of the last drawn frame and clears the dirty flag.
    pub fn drawn(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.feed.borrow_mut().dirty = false;
    }

    /// Applies one user intent.
    ///
    /// Game changes reach the screen through the session subscription;
    /// only cursor moves and resizes mark the view dirty here.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Place(pos) => {
                self.focus(pos);
                self.session.place(pos);
            }
            Intent::PlaceAtCursor => {
                self.session.place(self.cursor);
            }
            Intent::MoveCursor(direction) => self.focus(move_cursor(self.cursor, direction)),
            Intent::Click { column, row } => {
                match ScreenLayout::new(self.viewport).hit_test(column, row) {
                    Some(Target::Cell(pos)) => {
                        self.focus(pos);
                        self.session.place(pos);
                    }
                    Some(Target::Restart) => self.session.restart(),
                    None => debug!(column, row, "Click outside any target"),
                }
            }
            Intent::Restart => self.session.restart(),
            Intent::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Intent::Redraw => self.feed.borrow_mut().dirty = true,
        }
    }

    fn focus(&mut self, pos: Position) {
        if pos != self.cursor {
            self.cursor = pos;
            debug!(cursor = %self.cursor, "Cursor moved");
            self.feed.borrow_mut().dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use tictactoe_core::{Outcome, Player, Square};

    fn app() -> App {
        let mut app = App::new(Theme::default());
        app.drawn(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_starts_dirty_with_cursor_in_center() {
        let app = App::new(Theme::default());
        assert!(app.needs_redraw());
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_digit_places_and_moves_cursor() {
        let mut app = app();
        app.handle(Intent::Place(Position::TopLeft));
        assert_eq!(
            app.state().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::TopLeft);
        assert!(app.needs_redraw());
        assert_eq!(app.message().as_deref(), Some("Player 1 (X) played Top-left"));
    }

    #[test]
    fn test_place_at_cursor_after_moving() {
        let mut app = app();
        app.handle(Intent::MoveCursor(Direction::Down));
        app.handle(Intent::PlaceAtCursor);
        assert_eq!(
            app.state().board().get(Position::BottomCenter),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_accepted_mark_redraws_through_subscription() {
        let mut app = app();
        // The cursor stays put, so only the session can mark the view dirty.
        app.handle(Intent::PlaceAtCursor);
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_ignored_move_is_silent() {
        let mut app = app();
        app.handle(Intent::PlaceAtCursor);
        app.drawn(Rect::new(0, 0, 80, 24));
        let before = app.state().clone();

        app.handle(Intent::PlaceAtCursor);
        assert_eq!(app.state(), &before);
        assert_eq!(app.message().as_deref(), Some("Player 1 (X) played Center"));
        assert!(!app.needs_redraw());

        let center = ScreenLayout::new(Rect::new(0, 0, 80, 24)).cell(Position::Center);
        app.handle(Intent::Click {
            column: center.x + 1,
            row: center.y + 1,
        });
        assert_eq!(app.state(), &before);
        assert_eq!(app.message().as_deref(), Some("Player 1 (X) played Center"));
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_cursor_move_at_edge_does_not_redraw() {
        let mut app = app();
        app.handle(Intent::Place(Position::TopLeft));
        app.drawn(Rect::new(0, 0, 80, 24));
        app.handle(Intent::MoveCursor(Direction::Up));
        assert!(!app.needs_redraw());
        app.handle(Intent::MoveCursor(Direction::Right));
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_click_on_cell_places() {
        let mut app = app();
        let rect = ScreenLayout::new(Rect::new(0, 0, 80, 24)).cell(Position::BottomRight);
        app.handle(Intent::Click {
            column: rect.x + 1,
            row: rect.y + 1,
        });
        assert_eq!(
            app.state().board().get(Position::BottomRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_click_on_restart_resets() {
        let mut app = app();
        for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
            app.handle(Intent::Place(pos));
        }
        let restart = ScreenLayout::new(Rect::new(0, 0, 80, 24)).restart;
        app.handle(Intent::Click {
            column: restart.x,
            row: restart.y,
        });
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.message().as_deref(), Some("Game restarted"));
    }

    #[test]
    fn test_click_outside_is_harmless() {
        let mut app = app();
        app.handle(Intent::Click { column: 0, row: 0 });
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_keyboard_win_then_restart() {
        let mut app = app();
        for i in [0, 4, 1, 5, 2] {
            app.handle(Intent::Place(Position::ALL[i]));
        }
        assert_eq!(app.state().outcome(), Outcome::Win(Player::X));

        app.drawn(Rect::new(0, 0, 80, 24));
        let finished = app.state().clone();
        app.handle(Intent::PlaceAtCursor);
        app.handle(Intent::Place(Position::BottomRight));
        assert_eq!(app.state(), &finished);
        assert_eq!(app.message().as_deref(), Some("Player 1 (X) played Top-right"));

        app.handle(Intent::Restart);
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Intent::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_drawn_clears_dirty() {
        let mut app = app();
        assert!(!app.needs_redraw());
        app.handle(Intent::Redraw);
        assert!(app.needs_redraw());
    }
}
