//! BTC price line chart

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::domain::{PriceSeries, Session};

/// Y-axis bounds with some headroom so a flat line is still visible
pub fn y_bounds(series: &PriceSeries) -> Option<[f64; 2]> {
    let (lo, hi) = series.bounds()?;
    let pad = ((hi - lo) * 0.1).max(lo.abs() * 0.0005).max(0.5);
    Some([lo - pad, hi + pad])
}

pub fn draw(frame: &mut Frame, session: &Session, area: Rect) {
    let series = session.series();
    let block = Block::default().borders(Borders::ALL).title(" BTC Price ");

    let Some(bounds) = y_bounds(series) else {
        let placeholder = Paragraph::new("Waiting for the first price...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let points = series.points();
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let labels = series.labels();
    let first_label = labels.first().cloned().unwrap_or_default();
    let last_label = labels.last().cloned().unwrap_or_default();

    let datasets = vec![Dataset::default()
        .name("BTC Price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Yellow))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("time".dark_gray())
                .bounds([0.0, x_max])
                .labels(vec![Line::from(first_label), Line::from(last_label)]),
        )
        .y_axis(
            Axis::default()
                .title("USD".dark_gray())
                .bounds(bounds)
                .labels(vec![
                    Line::from(format!("{:.2}", bounds[0])),
                    Line::from(format!("{:.2}", bounds[1])),
                ]),
        );

    frame.render_widget(chart, area);
}
