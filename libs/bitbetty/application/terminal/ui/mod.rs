//! UI widgets for the game

pub mod guess_controls;
pub mod price_chart;
pub mod scoreboard;
pub mod username;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, InputMode};
use crate::domain::Session;

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    if app.input_mode == InputMode::Username {
        username::draw(frame, app, frame.area());
        return;
    }

    let session = app.session.read();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, &session, chunks[0]);
    draw_main(frame, &session, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, session: &Session, area: Rect) {
    let player = session.username().unwrap_or("-");

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " BitBetty ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("| Bitcoin price guessing game | "),
        Span::styled(format!("Player: {}", player), Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, session: &Session, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Chart
            Constraint::Length(34), // Score and controls
        ])
        .split(area);

    price_chart::draw(frame, session, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[1]);

    scoreboard::draw(frame, session, side[0]);
    guess_controls::draw(frame, session, side[1]);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.status_message.as_deref() {
        Some(status) if !status.is_empty() => format!(" {}", status),
        _ => " q=quit u/↑=up d/↓=down r=check result".to_string(),
    };

    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

    /// Render into an in-memory terminal and return the buffer
    pub fn render<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area)
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as one string per row
    pub fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn contains(buffer: &Buffer, needle: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(needle))
    }
}
