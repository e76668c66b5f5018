//! Terminal front end for Strictly Sketch.

mod app;
mod input;
mod ui;

pub use app::{App, Layer};
pub use input::{Command, cell_to_surface};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the player quits.
#[instrument(skip_all, fields(frame_rate = config.frame_rate()))]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Strictly Sketch TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Redraws on every frame tick and applies input as it arrives.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let engine = config.engine();
    let mut app = App::new(engine);
    let mut events = input::spawn_reader();
    app.start();

    let mut ticker = interval(engine.frame());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let mut canvas = Rect::default();
        terminal.draw(|frame| canvas = ui::draw(frame, &app))?;
        app.set_canvas_area(canvas);

        tokio::select! {
            _ = ticker.tick() => {}
            event = events.recv() => match event {
                Some(event) => {
                    if let Some(command) = Command::from_event(&event) {
                        app.handle_command(command);
                    }
                }
                None => {
                    info!("Input closed");
                    break;
                }
            },
        }

        app.reap_finished();
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
