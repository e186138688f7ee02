pub mod error;
pub mod history;
pub mod ticker;

pub use error::FetchError;
pub use history::{Candle, HistoryClient};
pub use ticker::{pair_for, TickerClient, TickerQuote};
