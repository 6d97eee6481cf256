//! Up/Down guess controls, locked while a round is pending

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{RoundState, Session};

pub fn draw(frame: &mut Frame, session: &Session, area: Rect) {
    let pending = session.round_state() == RoundState::Pending;

    let button = |label: &'static str, color: Color| {
        if pending {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        }
    };

    let mut lines = vec![
        Line::from(" Make a guess:"),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            button(" [u] Up ", Color::Green),
            Span::raw("  "),
            button(" [d] Down ", Color::Red),
        ]),
        Line::from(""),
    ];

    if pending {
        let remaining = session.time_remaining();
        lines.push(Line::from(Span::styled(
            format!(" Time remaining: {} seconds", remaining),
            Style::default().fg(Color::Yellow),
        )));
        if remaining == 0 {
            lines.push(Line::from(" Waiting for result (r to check)"));
        }
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Guess "));
    frame.render_widget(widget, area);
}
