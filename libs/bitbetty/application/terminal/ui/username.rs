//! Username entry screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::terminal::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    draw_form(frame, &app.username_input, app.status_message.as_deref(), area);
}

fn draw_form(frame: &mut Frame, input: &str, status: Option<&str>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(3), // Input
            Constraint::Length(2), // Status
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "BitBetty",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from("Bitcoin price guessing game"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(title, chunks[0]);

    let text = if input.is_empty() {
        Span::styled("Enter your username", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(input.to_string())
    };
    let field = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Username (Enter to submit, Esc to quit) "),
    );
    frame.render_widget(field, chunks[1]);

    if let Some(status) = status {
        let status = Paragraph::new(Span::styled(status.to_string(), Style::default().fg(Color::Red)));
        frame.render_widget(status, chunks[2]);
    }
}
