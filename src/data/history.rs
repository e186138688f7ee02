use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::FetchError;
use crate::ui::TimeFrame;

/// One OHLC bucket with its upstream volume fields, timestamp already
/// converted from epoch seconds.
#[derive(Debug, Clone)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volumefrom: f64,
    pub volumeto: f64,
}

// CryptoCompare wraps the candle array in a doubly-nested envelope.
#[derive(Debug, Deserialize)]
struct HistoResponse {
    #[serde(rename = "Data")]
    data: HistoData,
}

#[derive(Debug, Deserialize)]
struct HistoData {
    #[serde(rename = "Data")]
    data: Vec<HistoRow>,
}

#[derive(Debug, Deserialize)]
struct HistoRow {
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volumefrom: f64,
    #[serde(default)]
    volumeto: f64,
}

impl HistoRow {
    fn into_candle(self) -> Candle {
        Candle {
            time: DateTime::from_timestamp(self.time, 0).unwrap_or_default(),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volumefrom: self.volumefrom,
            volumeto: self.volumeto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HistoryClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Rows come back in upstream order (oldest first) and are not
    /// re-sorted. An empty array under a 200 reply is a valid empty
    /// sequence, not an error.
    pub async fn fetch(
        &self,
        symbol: &str,
        timeframe: TimeFrame,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = format!(
            "{}/data/v2/histo{}",
            self.base_url,
            timeframe.granularity().path_segment()
        );
        let fsym = symbol.to_uppercase();
        let limit = timeframe.limit().to_string();

        let res = self
            .client
            .get(&url)
            .query(&[
                ("fsym", fsym.as_str()),
                ("tsym", "USD"),
                ("limit", limit.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(FetchError::Status(res.status().as_u16()));
        }

        let body = res.json::<HistoResponse>().await?;
        Ok(body.data.data.into_iter().map(HistoRow::into_candle).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::HistoResponse;
    use chrono::DateTime;

    #[test]
    fn decodes_one_candle_row() {
        let body = r#"{"Response":"Success","Data":{"Aggregated":false,"Data":[
            {"time":1700000000,"open":1.0,"high":2.0,"low":0.5,"close":1.5,
             "volumefrom":12.5,"volumeto":18.75,"conversionType":"direct"}
        ]}}"#;

        let parsed: HistoResponse = serde_json::from_str(body).unwrap();
        let candles: Vec<_> = parsed
            .data
            .data
            .into_iter()
            .map(super::HistoRow::into_candle)
            .collect();

        assert_eq!(candles.len(), 1);
        let candle = &candles[0];
        assert_eq!(candle.time, DateTime::from_timestamp(1700000000, 0).unwrap());
        assert_eq!(candle.open, 1.0);
        assert_eq!(candle.high, 2.0);
        assert_eq!(candle.low, 0.5);
        assert_eq!(candle.close, 1.5);
        assert_eq!(candle.volumefrom, 12.5);
    }

    #[test]
    fn empty_data_array_is_a_valid_empty_sequence() {
        let body = r#"{"Data":{"Data":[]}}"#;
        let parsed: HistoResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data.data.is_empty());
    }

    #[test]
    fn missing_volume_fields_default_to_zero() {
        let body = r#"{"Data":{"Data":[
            {"time":1700000000,"open":1.0,"high":2.0,"low":0.5,"close":1.5}
        ]}}"#;
        let parsed: HistoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.data[0].volumefrom, 0.0);
    }

    #[test]
    fn epoch_conversion_round_trips() {
        let epoch = 1700000000i64;
        let time = DateTime::from_timestamp(epoch, 0).unwrap();
        assert_eq!(time.timestamp(), epoch);
    }
}
