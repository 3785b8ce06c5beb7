//! Stateless UI rendering for tic-tac-toe.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_core::{Position, Square};

use crate::app::App;
use crate::layout::{RESTART_LABEL, ScreenLayout};

const TITLE: &str = "Tic Tac Toe";
const HELP: &str = "arrows/hjkl move · enter/space place · 1-9 place · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let state = app.state();

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let winning = state.winning_line();
    for pos in Position::ALL {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Highlight::Winning
        } else if pos == app.cursor() {
            Highlight::Cursor
        } else {
            Highlight::None
        };
        draw_cell(frame, layout.cell(pos), app, pos, highlight);
    }

    let focus = Paragraph::new(app.cursor().accessible_label(state.board()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(focus, layout.focus);

    let outcome = state.outcome();
    let status_color = if outcome.winner().is_some() {
        Color::Green
    } else if outcome.is_draw() {
        Color::Magenta
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(state.status().to_string())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if let Some(message) = app.message() {
        let message = Paragraph::new(message)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(message, layout.message);
    }

    let restart = Paragraph::new(RESTART_LABEL)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    frame.render_widget(restart, layout.restart);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    let footer = Paragraph::new(footer_text(chrono::Local::now().year()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

/// Copyright line for a given year.
pub fn footer_text(year: i32) -> String {
    format!("© {year} {TITLE}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Cursor,
    Winning,
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlight: Highlight) {
    let (symbol, mark_style) = match app.state().board().get(pos) {
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(app.theme().mark_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let (border_style, border_type, mark_style) = match highlight {
        Highlight::None => (
            Style::default().fg(Color::DarkGray),
            BorderType::Plain,
            mark_style,
        ),
        Highlight::Cursor => (
            Style::default().fg(Color::Yellow),
            BorderType::Thick,
            mark_style,
        ),
        Highlight::Winning => (
            Style::default().fg(Color::Green),
            BorderType::Double,
            mark_style.add_modifier(Modifier::REVERSED),
        ),
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    frame.render_widget(cell, area);
}
