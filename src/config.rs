pub const GEMINI_API_URL: &str = "https://api.gemini.com/v1";
pub const CRYPTOCOMPARE_API_URL: &str = "https://min-api.cryptocompare.com";

/// Process configuration, read from the environment once at startup and
/// threaded into the client constructors.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub ticker_base_url: String,
    pub histo_base_url: String,
}

impl Config {
    /// A missing API key is not an error here; it surfaces as an
    /// authentication failure on the first historical fetch.
    pub fn from_env() -> Self {
        let api_key = std::env::var("COINWATCH_API_KEY")
            .or_else(|_| std::env::var("CRYPTOCOMPARE_API_KEY"))
            .unwrap_or_default();

        Self {
            api_key,
            ticker_base_url: GEMINI_API_URL.to_string(),
            histo_base_url: CRYPTOCOMPARE_API_URL.to_string(),
        }
    }
}

pub fn default_watchlist() -> Vec<String> {
    vec![
        "BTC".to_string(),
        "ETH".to_string(),
        "LTC".to_string(),
        "BCH".to_string(),
        "ZEC".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::default_watchlist;

    #[test]
    fn watchlist_has_the_five_supported_symbols() {
        assert_eq!(default_watchlist(), ["BTC", "ETH", "LTC", "BCH", "ZEC"]);
    }
}
