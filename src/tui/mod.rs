//! Terminal UI: game picker plus board screen.
//!
//! Single-threaded and synchronous; each key event is fully handled
//! before the next is read.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridgames::{Catalog, GameKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

use app::App;

/// Runs the TUI until the user quits.
pub fn run(catalog: Catalog, preselect: Option<GameKind>) -> Result<()> {
    info!("starting gridgames TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(catalog, preselect).and_then(|mut app| run_loop(&mut terminal, &mut app));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "TUI exited with error");
    }
    result
}

/// Blocking draw/read loop.
fn run_loop<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code)?;
            }
        }

        if app.should_quit() {
            info!("user quit");
            return Ok(());
        }
    }
}
