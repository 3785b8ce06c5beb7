//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Flex, Layout, Position as Point, Rect};
use tictactoe_core::Position;

/// Width of one board cell including its border.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell including its border.
pub const CELL_HEIGHT: u16 = 3;
/// Label of the restart button.
pub const RESTART_LABEL: &str = "[ Restart ]";

const CELL_GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + CELL_GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Cell(Position),
    /// The restart button.
    Restart,
}

/// Where each part of the screen goes for a given terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    /// Board squares in row-major order.
    pub cells: [Rect; 9],
    pub focus: Rect,
    pub status: Rect,
    pub message: Rect,
    pub restart: Rect,
    pub help: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let [title, _, board, focus, status, message, restart_row, help, _, footer] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(BOARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        let [board] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
            .flex(Flex::Center)
            .areas(board);
        let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).areas(board);

        let mut cells = [Rect::default(); 9];
        for (r, row) in rows.into_iter().enumerate() {
            let cols: [Rect; 3] = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3])
                .spacing(CELL_GAP)
                .areas(row);
            for (c, cell) in cols.into_iter().enumerate() {
                cells[r * 3 + c] = cell;
            }
        }

        let [restart] = Layout::horizontal([Constraint::Length(RESTART_LABEL.len() as u16)])
            .flex(Flex::Center)
            .areas(restart_row);

        Self {
            title,
            cells,
            focus,
            status,
            message,
            restart,
            help,
            footer,
        }
    }

    /// Rectangle of a board square.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }

    /// Resolves a terminal coordinate to a clickable target.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        let point = Point::new(column, row);
        if self.restart.contains(point) {
            return Some(Target::Restart);
        }
        Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
            .map(Target::Cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_cells_form_a_grid() {
        let layout = layout();
        let top_left = layout.cell(Position::TopLeft);
        assert_eq!(top_left.width, CELL_WIDTH);
        assert_eq!(top_left.height, CELL_HEIGHT);
        // Centered horizontally on an 80 column screen.
        assert!(top_left.x.abs_diff((80 - BOARD_WIDTH) / 2) <= 1);
        assert_eq!(top_left.y, 2);

        let center = layout.cell(Position::Center);
        assert_eq!(center.x, top_left.x + CELL_WIDTH + CELL_GAP);
        assert_eq!(center.y, top_left.y + CELL_HEIGHT);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for a in Position::ALL {
            for b in Position::ALL {
                if a != b {
                    assert!(!layout.cell(a).intersects(layout.cell(b)), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_hit_test_every_cell_center() {
        let layout = layout();
        for pos in Position::ALL {
            let rect = layout.cell(pos);
            let hit = layout.hit_test(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_test_restart_and_misses() {
        let layout = layout();
        let restart = layout.restart;
        assert_eq!(restart.width, RESTART_LABEL.len() as u16);
        assert_eq!(layout.hit_test(restart.x, restart.y), Some(Target::Restart));
        assert_eq!(layout.hit_test(0, 0), None);
        // The gap between the first two cells.
        let gap_x = layout.cell(Position::TopLeft).right();
        assert_eq!(layout.hit_test(gap_x, layout.cell(Position::TopLeft).y), None);
    }

    #[test]
    fn test_footer_is_last_row() {
        let layout = layout();
        assert_eq!(layout.footer.y, 23);
    }
}
