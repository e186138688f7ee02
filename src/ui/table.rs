use crate::data::{Candle, FetchError};
use crate::ui::TimeFrame;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Full historical table, newest row first. An empty sequence under a 200
/// reply renders as "no rows"; a fetch error renders the failure notice.
pub fn render_history_table(
    frame: &mut Frame,
    area: Rect,
    symbol: &str,
    timeframe: TimeFrame,
    candles: &[Candle],
    error: Option<&FetchError>,
) {
    let block = Block::default()
        .title(format!(
            "Historical Data for {} ({})",
            symbol.to_uppercase(),
            timeframe.label()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if let Some(err) = error {
        let notice = Paragraph::new(Line::from(Span::styled(
            format!("Error fetching historical data: {err}"),
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(notice, area);
        return;
    }

    if candles.is_empty() {
        let notice = Paragraph::new(Line::from(Span::styled(
            "No historical rows.",
            Style::default().fg(Color::Gray),
        )))
        .block(block);
        frame.render_widget(notice, area);
        return;
    }

    let header = Row::new(["Time", "Open", "High", "Low", "Close", "VolFrom", "VolTo"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = candles
        .iter()
        .rev()
        .map(|c| {
            Row::new(vec![
                c.time.format("%Y-%m-%d %H:%M").to_string(),
                format!("{:.2}", c.open),
                format!("{:.2}", c.high),
                format!("{:.2}", c.low),
                format!("{:.2}", c.close),
                format!("{:.4}", c.volumefrom),
                format!("{:.4}", c.volumeto),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}
