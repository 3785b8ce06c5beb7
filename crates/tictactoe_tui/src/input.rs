//! Translation of terminal events into game intents.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use tictactoe_core::Position;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the player asked for, independent of how they asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place a mark at a specific square (digit keys).
    Place(Position),
    /// Place a mark under the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Left click at a terminal cell; resolved against the layout later.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
    /// Terminal resized; redraw.
    Redraw,
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a terminal event to an intent. Unbound input yields `None`.
pub fn intent_for(event: &Event) -> Option<Intent> {
    match event {
        Event::Key(key) => intent_for_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Intent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(Intent::Redraw),
        _ => None,
    }
}

fn intent_for_key(key: &KeyEvent) -> Option<Intent> {
    // Windows reports both press and release.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Intent::Place)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(
            intent_for(&press(KeyCode::Char('1'))),
            Some(Intent::Place(Position::TopLeft))
        );
        assert_eq!(
            intent_for(&press(KeyCode::Char('9'))),
            Some(Intent::Place(Position::BottomRight))
        );
        assert_eq!(intent_for(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            intent_for(&press(KeyCode::Char('k'))),
            Some(Intent::MoveCursor(Direction::Up))
        );
        assert_eq!(
            intent_for(&press(KeyCode::Left)),
            Some(Intent::MoveCursor(Direction::Left))
        );
        assert_eq!(intent_for(&press(KeyCode::Enter)), Some(Intent::PlaceAtCursor));
        assert_eq!(intent_for(&press(KeyCode::Char(' '))), Some(Intent::PlaceAtCursor));
    }

    #[test]
    fn test_restart_and_quit() {
        assert_eq!(intent_for(&press(KeyCode::Char('r'))), Some(Intent::Restart));
        assert_eq!(intent_for(&press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(intent_for(&press(KeyCode::Esc)), Some(Intent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(intent_for(&ctrl_c), Some(Intent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('r'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(intent_for(&release), None);
    }

    #[test]
    fn test_left_click_only() {
        let click = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 12,
                row: 5,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            intent_for(&click(MouseEventKind::Down(MouseButton::Left))),
            Some(Intent::Click { column: 12, row: 5 })
        );
        assert_eq!(intent_for(&click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(intent_for(&click(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_resize_redraws() {
        assert_eq!(intent_for(&Event::Resize(80, 24)), Some(Intent::Redraw));
    }
}
