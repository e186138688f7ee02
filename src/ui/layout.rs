use crate::data::{Candle, FetchError, TickerQuote};
use crate::ui::{chart, table, ticker, StatusBar, TimeFrameSelector};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LayoutManager {
    pub watchlist: Vec<String>,
    pub selected_symbol: usize,
    pub timeframe: TimeFrameSelector,
    pub statusbar: StatusBar,
}

impl LayoutManager {
    pub fn new(watchlist: Vec<String>) -> Self {
        Self {
            watchlist,
            selected_symbol: 0,
            timeframe: TimeFrameSelector::new(),
            statusbar: StatusBar::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.watchlist[self.selected_symbol]
    }

    pub fn select_next_symbol(&mut self) {
        self.selected_symbol = (self.selected_symbol + 1) % self.watchlist.len();
    }

    pub fn select_prev_symbol(&mut self) {
        self.selected_symbol = if self.selected_symbol == 0 {
            self.watchlist.len() - 1
        } else {
            self.selected_symbol - 1
        };
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        quote: Option<&TickerQuote>,
        quote_error: Option<&FetchError>,
        candles: &[Candle],
        history_error: Option<&FetchError>,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        self.timeframe.render(frame, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(40)])
            .split(main_chunks[1]);

        self.render_watchlist(frame, content_chunks[0]);

        let main_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(content_chunks[1]);

        ticker::render_ticker(frame, main_rows[0], self.symbol(), quote, quote_error);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_rows[1]);

        table::render_history_table(
            frame,
            lower[0],
            self.symbol(),
            self.timeframe.current(),
            candles,
            history_error,
        );

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(lower[1]);

        chart::render_line_chart(frame, charts[0], candles);
        chart::render_candles(frame, charts[1], candles);

        self.statusbar.render(frame, main_chunks[2]);
    }

    fn render_watchlist(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Symbols")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<ListItem> = self
            .watchlist
            .iter()
            .enumerate()
            .map(|(idx, symbol)| {
                let style = if idx == self.selected_symbol {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if idx == self.selected_symbol { "> " } else { "  " };
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", marker, symbol),
                    style,
                )))
            })
            .collect();

        let list = List::new(items).style(Style::default().fg(Color::White));
        frame.render_widget(list, inner);
    }
}
