use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::FetchError;

/// Current best bid/ask/last snapshot for a pair. Prices are kept as the
/// strings Gemini returns; extra body fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerQuote {
    pub last: String,
    pub bid: String,
    pub ask: String,
}

#[derive(Debug, Clone)]
pub struct TickerClient {
    client: Client,
    base_url: String,
}

impl TickerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, pair: &str) -> Result<TickerQuote, FetchError> {
        let url = format!("{}/pubticker/{}", self.base_url, pair);
        let res = self.client.get(&url).send().await?;

        if res.status() != StatusCode::OK {
            return Err(FetchError::Status(res.status().as_u16()));
        }

        Ok(res.json::<TickerQuote>().await?)
    }
}

/// Gemini pair identifiers are lower-case with the quote currency appended.
pub fn pair_for(symbol: &str) -> String {
    format!("{}usd", symbol.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{pair_for, TickerQuote};

    #[test]
    fn decodes_ticker_body_unchanged() {
        let body = r#"{"last":"50000","bid":"49990","ask":"50010","volume":{"BTC":"100"}}"#;
        let quote: TickerQuote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.last, "50000");
        assert_eq!(quote.bid, "49990");
        assert_eq!(quote.ask, "50010");
    }

    #[test]
    fn pair_is_lower_cased_with_usd_quote() {
        assert_eq!(pair_for("BTC"), "btcusd");
        assert_eq!(pair_for("zec"), "zecusd");
    }
}
