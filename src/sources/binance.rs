use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{CandleQuery, CandleSource};
use crate::error::{AppError, Result};
use crate::types::{Candle, Series};

pub const BINANCE_API_URL: &str = "https://api.binance.com/api/v3";
/// Maximum klines Binance returns per request.
const KLINES_LIMIT: usize = 1000;
/// Characters of an error body kept for logs and errors.
const ERROR_BODY_CHARS: usize = 200;

/// Binance REST client for historical klines.
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BinanceClient {
    /// Create a new Binance client.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent("WhaleRoom/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch one page of klines starting at `start_ms`.
    async fn fetch_page(&self, query: &CandleQuery, start_ms: i64) -> Result<Vec<Candle>> {
        let url = format!("{}/klines", self.base_url);

        let mut request = self.client.get(&url).query(&[
            ("symbol", query.symbol.clone()),
            ("interval", query.interval.code().to_string()),
            ("startTime", start_ms.to_string()),
            ("endTime", query.end_ms.to_string()),
            ("limit", KLINES_LIMIT.to_string()),
        ]);
        if let Some(ref key) = self.api_key {
            request = request.header("X-MBX-APIKEY", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet = truncate_body(&text);
            warn!("Binance API returned {}: {}", status, snippet);
            return Err(AppError::Source(format!(
                "Binance API error {}: {}",
                status, snippet
            )));
        }

        let body = response.text().await?;
        let rows: Vec<Vec<Value>> = serde_json::from_str(&body)?;
        rows.iter().map(|row| parse_kline(row)).collect()
    }
}

#[async_trait]
impl CandleSource for BinanceClient {
    async fn fetch_series(&self, query: &CandleQuery) -> Result<Series> {
        info!(
            symbol = %query.symbol,
            interval = query.interval.code(),
            expected = query.expected_len(),
            "Fetching klines from Binance"
        );

        let mut candles: Vec<Candle> = Vec::new();
        let mut cursor = query.start_ms;

        loop {
            let page = self.fetch_page(query, cursor).await?;
            let page_len = page.len();
            debug!(cursor, page_len, "Fetched Binance klines page");

            let Some(last) = page.last() else {
                break;
            };
            cursor = last.timestamp + 1;
            candles.extend(page);

            if page_len < KLINES_LIMIT || cursor > query.end_ms {
                break;
            }
        }

        info!("Successfully fetched {} candles", candles.len());
        Ok(Series::new(query.symbol.clone(), query.interval, candles)?)
    }
}

/// First `ERROR_BODY_CHARS` characters of an error body, cut on a char boundary.
fn truncate_body(text: &str) -> String {
    text.chars().take(ERROR_BODY_CHARS).collect()
}

/// Decode one kline array: `[openTime, open, high, low, close, volume, ...]`.
/// Prices arrive as decimal strings.
fn parse_kline(row: &[Value]) -> Result<Candle> {
    if row.len() < 6 {
        return Err(AppError::Source(format!(
            "kline has {} fields, expected at least 6",
            row.len()
        )));
    }

    let timestamp = row[0]
        .as_i64()
        .ok_or_else(|| AppError::Source(format!("kline open time is not an integer: {}", row[0])))?;

    Ok(Candle {
        timestamp,
        open: parse_decimal(&row[1], "open")?,
        high: parse_decimal(&row[2], "high")?,
        low: parse_decimal(&row[3], "low")?,
        close: parse_decimal(&row[4], "close")?,
        volume: parse_decimal(&row[5], "volume")?,
    })
}

fn parse_decimal(value: &Value, field: &str) -> Result<f64> {
    match value {
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| AppError::Source(format!("kline {} is not a number: {:?}", field, s))),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AppError::Source(format!("kline {} out of range", field))),
        other => Err(AppError::Source(format!(
            "kline {} has unexpected type: {}",
            field, other
        ))),
    }
}
