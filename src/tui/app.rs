//! Application state and key handling.

use anyhow::Result;
use crossterm::event::KeyCode;
use gridgames::{
    Catalog, Coord, GameEngine, GameKind, MoveDisposition, PlacementPolicy, Status,
};
use tracing::{debug, info};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The game picker menu.
    Picker,
    /// An active board.
    Board,
}

/// Main application state.
pub struct App {
    catalog: Catalog,
    screen: Screen,
    selected: usize,
    engine: Option<GameEngine>,
    cursor: Coord,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application, jumping straight to a board when a game
    /// was chosen on the command line.
    pub fn new(catalog: Catalog, preselect: Option<GameKind>) -> Result<Self> {
        let mut app = Self {
            catalog,
            screen: Screen::Picker,
            selected: 0,
            engine: None,
            cursor: Coord { x: 0, y: 0 },
            status_message: "Pick a game".to_string(),
            should_quit: false,
        };
        if let Some(kind) = preselect {
            let index = app
                .catalog
                .games()
                .iter()
                .position(|entry| *entry.id() == kind)
                .ok_or_else(|| anyhow::anyhow!("game {kind} is not in the catalog"))?;
            app.selected = index;
            app.start_selected()?;
        }
        Ok(app)
    }

    /// The catalog backing the picker.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Picker selection index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The running engine, while a board is showing.
    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the active screen.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        match self.screen {
            Screen::Picker => self.handle_picker_key(key)?,
            Screen::Board => self.handle_board_key(key)?,
        }
        Ok(())
    }

    fn handle_picker_key(&mut self, key: KeyCode) -> Result<()> {
        let count = self.catalog.games().len();
        match key {
            KeyCode::Up if self.selected > 0 => self.selected -= 1,
            KeyCode::Down if self.selected + 1 < count => self.selected += 1,
            KeyCode::Enter => self.start_selected()?,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.submit()?,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Esc => {
                info!("returning to picker");
                self.engine = None;
                self.screen = Screen::Picker;
                self.status_message = "Pick a game".to_string();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Starts the currently selected catalog entry.
    fn start_selected(&mut self) -> Result<()> {
        let entry = &self.catalog.games()[self.selected];
        info!(game = %entry.id(), "starting game");
        let engine = entry.engine()?;
        self.status_message = format!(
            "{}: {} ({}) to move",
            entry.name(),
            engine.current_player().name(),
            engine.current_player().symbol(),
        );
        self.engine = Some(engine);
        self.cursor = Coord { x: 0, y: 0 };
        self.screen = Screen::Board;
        Ok(())
    }

    /// Moves the cursor, clamped to the board. Gravity games pin the
    /// cursor to the top row; only the column matters there.
    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let Some(engine) = &self.engine else { return };
        let grid = engine.state().grid();
        let gravity = engine.config().policy() == PlacementPolicy::GravityDrop;

        let x = self.cursor.x.saturating_add_signed(dx).min(grid.width() - 1);
        let y = if gravity {
            0
        } else {
            self.cursor.y.saturating_add_signed(dy).min(grid.height() - 1)
        };
        self.cursor = Coord { x, y };
    }

    /// Submits the cursor cell as a move. Submissions are suppressed once
    /// the game is decided; the engine would ignore them anyway.
    fn submit(&mut self) -> Result<()> {
        let Some(engine) = &mut self.engine else {
            return Ok(());
        };
        if engine.state().status().is_terminal() {
            return Ok(());
        }

        let disposition = engine.apply_move(self.cursor)?;
        debug!(cursor = %self.cursor, ?disposition, "move submitted");

        self.status_message = match disposition {
            MoveDisposition::Rejected => "That spot is not available".to_string(),
            MoveDisposition::Ignored => return Ok(()),
            MoveDisposition::Applied => match engine.state().status() {
                Status::Won(_) => {
                    let winner = engine.winner().expect("won game has a winner");
                    format!(
                        "{} ({}) wins! Press 'r' to play again or Esc for the menu.",
                        winner.name(),
                        winner.symbol(),
                    )
                }
                Status::Tied => {
                    "Tie game! Press 'r' to play again or Esc for the menu.".to_string()
                }
                Status::InProgress => format!(
                    "{} ({}) to move",
                    engine.current_player().name(),
                    engine.current_player().symbol(),
                ),
            },
        };
        Ok(())
    }

    /// Resets the active game to its initial state.
    fn restart(&mut self) {
        if let Some(engine) = &mut self.engine {
            engine.reset();
            self.cursor = Coord { x: 0, y: 0 };
            self.status_message = format!(
                "New game: {} ({}) to move",
                engine.current_player().name(),
                engine.current_player().symbol(),
            );
        }
    }
}
