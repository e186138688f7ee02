use crate::config::{default_watchlist, Config};
use crate::data::{pair_for, Candle, FetchError, HistoryClient, TickerClient, TickerQuote};
use crate::ui::LayoutManager;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

/// Session state: the user's selections, the two clients, and the results
/// of the latest fetch cycle. Nothing survives a restart.
pub struct App {
    ticker: TickerClient,
    history: HistoryClient,
    pub layout: LayoutManager,
    pub quote: Option<TickerQuote>,
    pub quote_error: Option<FetchError>,
    pub candles: Vec<Candle>,
    pub history_error: Option<FetchError>,
    needs_refresh: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            ticker: TickerClient::new(&config.ticker_base_url),
            history: HistoryClient::new(&config.histo_base_url, &config.api_key),
            layout: LayoutManager::new(default_watchlist()),
            quote: None,
            quote_error: None,
            candles: Vec::new(),
            history_error: None,
            needs_refresh: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        while !self.should_quit {
            if self.needs_refresh {
                self.layout.statusbar.refreshing = true;
                self.draw(terminal)?;
                self.refresh().await;
                self.layout.statusbar.refreshing = false;
                self.needs_refresh = false;
            }

            self.draw(terminal)?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.on_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        terminal.draw(|frame| {
            self.layout.render(
                frame,
                frame.area(),
                self.quote.as_ref(),
                self.quote_error.as_ref(),
                &self.candles,
                self.history_error.as_ref(),
            );
        })?;
        Ok(())
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => {
                self.layout.select_prev_symbol();
                self.needs_refresh = true;
            }
            KeyCode::Down => {
                self.layout.select_next_symbol();
                self.needs_refresh = true;
            }
            KeyCode::Left => {
                self.layout.timeframe.select_prev();
                self.needs_refresh = true;
            }
            KeyCode::Right => {
                self.layout.timeframe.select_next();
                self.needs_refresh = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.needs_refresh = true,
            _ => {}
        }
    }

    /// One linear cycle: ticker fetch, then historical fetch. The two are
    /// independent failure domains; an error in one never skips the other.
    async fn refresh(&mut self) {
        let symbol = self.layout.symbol().to_string();
        let timeframe = self.layout.timeframe.current();
        let pair = pair_for(&symbol);
        tracing::debug!(%symbol, timeframe = timeframe.label(), "refreshing dashboard");

        match self.ticker.fetch(&pair).await {
            Ok(quote) => {
                self.quote = Some(quote);
                self.quote_error = None;
            }
            Err(err) => {
                tracing::warn!(%pair, error = %err, "ticker fetch failed");
                self.quote = None;
                self.quote_error = Some(err);
            }
        }

        match self.history.fetch(&symbol, timeframe).await {
            Ok(candles) => {
                self.candles = candles;
                self.history_error = None;
            }
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "historical fetch failed");
                self.candles.clear();
                self.history_error = Some(err);
            }
        }

        self.layout.statusbar.pair = format!("{}/USD", symbol.to_uppercase());
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::Config;
    use crossterm::event::KeyCode;
    use crate::ui::TimeFrame;

    fn test_app() -> App {
        let config = Config {
            api_key: "test-key".to_string(),
            ticker_base_url: "http://localhost:1".to_string(),
            histo_base_url: "http://localhost:1".to_string(),
        };
        App::new(&config)
    }

    #[test]
    fn selection_keys_mark_the_session_for_refresh() {
        let mut app = test_app();
        app.needs_refresh = false;

        app.on_key(KeyCode::Down);
        assert!(app.needs_refresh);
        assert_eq!(app.layout.symbol(), "ETH");

        app.needs_refresh = false;
        app.on_key(KeyCode::Right);
        assert!(app.needs_refresh);
        assert_eq!(app.layout.timeframe.current(), TimeFrame::FiveMinutes);
    }

    #[test]
    fn refresh_key_forces_a_cycle_without_changing_selections() {
        let mut app = test_app();
        app.needs_refresh = false;

        app.on_key(KeyCode::Char('r'));
        assert!(app.needs_refresh);
        assert_eq!(app.layout.symbol(), "BTC");
        assert_eq!(app.layout.timeframe.current(), TimeFrame::OneMinute);
    }

    #[test]
    fn quit_keys_end_the_session() {
        let mut app = test_app();
        app.on_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn failed_fetches_are_captured_per_domain() {
        // Unroutable base URLs: both fetches fail at the network level and
        // must land in their own error slots without crossing domains.
        let mut app = test_app();
        app.refresh().await;

        assert!(app.quote.is_none());
        assert!(app.quote_error.is_some());
        assert!(app.candles.is_empty());
        assert!(app.history_error.is_some());
        assert_eq!(app.layout.statusbar.pair, "BTC/USD");
    }
}
