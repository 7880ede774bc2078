//! Stateless rendering for the picker and board screens.

use gridgames::{Cell, Coord, GameEngine, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};

/// Draws the active screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Content
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Gridgames")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Picker => draw_picker(frame, chunks[1], app),
        Screen::Board => {
            if let Some(engine) = app.engine() {
                draw_board(frame, chunks[1], engine, app.cursor());
            }
        }
    }

    let help = match app.screen() {
        Screen::Picker => "Up/Down select, Enter play, q quit",
        Screen::Board => "Arrows move, Enter place, r restart, Esc menu, q quit",
    };
    let status = Paragraph::new(format!("{}  |  {}", app.status_message(), help))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Draws the game picker menu.
fn draw_picker(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (i, entry) in app.catalog().games().iter().enumerate() {
        let text = format!("{:<14} {}", entry.name(), entry.description());
        let style = if i == app.selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(Line::from(""));
    }

    let height = lines.len() as u16;
    let menu_area = center_rect(area, 60, height.max(1));
    let menu = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(menu, menu_area);
}

/// Draws the board with the cursor highlighted. Each cell renders three
/// characters wide; the finished board dims except for the status line.
fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Coord) {
    let grid = engine.state().grid();
    let active = engine.state().status() == Status::InProgress;

    let mut lines = Vec::with_capacity(grid.height());
    for y in 0..grid.height() {
        let mut spans = Vec::with_capacity(grid.width());
        for x in 0..grid.width() {
            let coord = Coord { x, y };
            let cell = grid.get(coord).unwrap_or(Cell::Empty);

            let (symbol, base_style) = match cell {
                Cell::Empty => ('·', Style::default().fg(Color::DarkGray)),
                Cell::Mark(mark) => {
                    let (symbol, color) = engine
                        .players()
                        .iter()
                        .position(|p| p.mark() == mark)
                        .map(|i| {
                            let color = if i == 0 { Color::Blue } else { Color::Red };
                            (engine.players()[i].symbol(), color)
                        })
                        .unwrap_or(('?', Color::White));
                    (symbol, Style::default().fg(color).add_modifier(Modifier::BOLD))
                }
            };

            let style = if active && coord == cursor {
                base_style.bg(Color::White).fg(Color::Black)
            } else {
                base_style
            };
            spans.push(Span::styled(format!(" {symbol} "), style));
        }
        lines.push(Line::from(spans));
    }

    let width = (grid.width() * 3) as u16;
    let board_area = center_rect(area, width, grid.height() as u16);
    let board = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(board, board_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
