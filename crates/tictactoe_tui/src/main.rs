//! Terminal UI for two-player tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
mod ui;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::{Theme, TuiConfig};

fn main() -> Result<()> {
    // Missing .env is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?
        .with_overrides(cli.log_file, cli.no_mouse);
    let theme = Theme::try_from(config.theme())?;

    init_tracing(&config)?;
    let mouse = *config.mouse();
    info!(mouse, "Starting tic-tac-toe");

    let mut terminal = ratatui::init();
    let result = if mouse {
        execute!(std::io::stdout(), EnableMouseCapture).map_err(anyhow::Error::from)
    } else {
        Ok(())
    }
    .and_then(|()| run_app(&mut terminal, App::new(theme)));

    if mouse {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "Terminal loop failed");
    }
    info!("Exiting tic-tac-toe");
    result
}

/// Sends tracing output to the configured log file so it never draws over the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Blocks on one terminal event at a time, applies it and redraws when needed.
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        if app.needs_redraw() {
            let frame = terminal.draw(|frame| ui::draw(frame, &app))?;
            app.drawn(frame.area);
        }

        if let Some(intent) = input::intent_for(&event::read()?) {
            app.handle(intent);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
