use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct StatusBar {
    pub pair: String,
    pub refreshing: bool,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            pair: String::new(),
            refreshing: false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (glyph, glyph_color) = if self.refreshing {
            ("○", Color::Yellow)
        } else {
            ("●", Color::Green)
        };

        let text = Line::from(vec![
            Span::styled(format!("{} ", glyph), Style::default().fg(glyph_color)),
            Span::styled(self.pair.clone(), Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Symbol "),
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::raw(":Timeframe "),
            Span::styled("R", Style::default().fg(Color::Yellow)),
            Span::raw(":Refresh "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(":Quit"),
        ]);

        let para = Paragraph::new(text).block(Block::default());
        frame.render_widget(para, area);
    }
}
