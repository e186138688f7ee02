use crate::data::{FetchError, TickerQuote};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn labeled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_ticker(
    frame: &mut Frame,
    area: Rect,
    symbol: &str,
    quote: Option<&TickerQuote>,
    error: Option<&FetchError>,
) {
    let block = Block::default()
        .title(format!("Price for {}", symbol.to_uppercase()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = if let Some(err) = error {
        vec![Line::from(Span::styled(
            format!("Error fetching ticker price: {err}"),
            Style::default().fg(Color::Red),
        ))]
    } else if let Some(quote) = quote {
        vec![
            labeled("Last Price: ", format!("${}", quote.last)),
            labeled("Bid Price:  ", format!("${}", quote.bid)),
            labeled("Ask Price:  ", format!("${}", quote.ask)),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Fetching...",
            Style::default().fg(Color::Gray),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::render_ticker;
    use crate::data::{FetchError, TickerQuote};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_the_three_quote_fields() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let quote = TickerQuote {
            last: "50000".to_string(),
            bid: "49990".to_string(),
            ask: "50010".to_string(),
        };

        terminal
            .draw(|frame| render_ticker(frame, frame.area(), "BTC", Some(&quote), None))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("$50000"));
        assert!(text.contains("$49990"));
        assert!(text.contains("$50010"));
    }

    #[test]
    fn renders_failure_notice_with_the_status_code() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let err = FetchError::Status(503);

        terminal
            .draw(|frame| render_ticker(frame, frame.area(), "BTC", None, Some(&err)))
            .unwrap();

        assert!(buffer_text(&terminal).contains("503"));
    }
}
