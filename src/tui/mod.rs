//! Terminal UI.
//!
//! A synchronous loop: draw, wait up to one tick for an event, handle it
//! to completion, repeat.

mod app;
mod input;
mod ui;

pub use app::{App, Screen};
pub use input::Action;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs `app` until the user quits.
#[instrument(skip(app), fields(screen = app.title()))]
pub fn run(app: App, tick_rate: Duration) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Term, mut app: App, tick_rate: Duration) -> Result<()> {
    loop {
        let frame_area = terminal.draw(|f| ui::draw(f, &app))?.area;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, ui::areas(frame_area).board),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
