//! Score and current price

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Session;

/// Price as shown to the user, or a loading marker before the first fetch
pub fn price_text(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${:.2}", price),
        None => "Loading...".to_string(),
    }
}

pub fn draw(frame: &mut Frame, session: &Session, area: Rect) {
    let score = session.score();
    let score_color = if score < 0 { Color::Red } else { Color::Green };

    let lines = vec![
        Line::from(vec![
            Span::raw(" Score: "),
            Span::styled(
                score.to_string(),
                Style::default().fg(score_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Current BTC Price: "),
            Span::styled(
                price_text(session.current_price()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(widget, area);
}
