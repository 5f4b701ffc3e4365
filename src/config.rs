use std::env;

use crate::sinks::telegram::TELEGRAM_API_URL;
use crate::sources::binance::BINANCE_API_URL;
use crate::types::CandleInterval;

/// Telegram delivery settings. Present only when both token and channel are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// Bot API base URL.
    pub api_url: String,
    /// Bot token issued by BotFather.
    pub bot_token: String,
    /// Destination chat or channel id.
    pub channel_id: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Trading pair, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Candle granularity.
    pub interval: CandleInterval,
    /// Trailing window to fetch, in days.
    pub lookback_days: u32,
    /// Binance REST base URL.
    pub binance_api_url: String,
    /// Binance API key (optional, klines are public).
    pub binance_api_key: Option<String>,
    /// Telegram delivery; `None` prints to stdout instead.
    pub telegram: Option<TelegramConfig>,
    /// Channel name shown in the report header.
    pub channel_name: String,
    /// Channel tag shown in the report footer.
    pub channel_tag: String,
    /// Seconds between runs (0 = run once).
    pub run_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable values fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let telegram = match (
            non_empty("TELEGRAM_BOT_TOKEN"),
            non_empty("TELEGRAM_CHANNEL_ID"),
        ) {
            (Some(bot_token), Some(channel_id)) => Some(TelegramConfig {
                api_url: non_empty("TELEGRAM_API_URL")
                    .unwrap_or_else(|| TELEGRAM_API_URL.to_string()),
                bot_token,
                channel_id,
            }),
            _ => None,
        };

        Self {
            symbol: non_empty("SYMBOL")
                .map(|s| s.trim().to_uppercase())
                .unwrap_or_else(|| "BTCUSDT".to_string()),
            interval: non_empty("CANDLE_INTERVAL")
                .and_then(|v| CandleInterval::from_str(v.trim()))
                .unwrap_or(CandleInterval::FourHours),
            lookback_days: non_empty("LOOKBACK_DAYS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|days: &u32| *days > 0)
                .unwrap_or(30),
            binance_api_url: non_empty("BINANCE_API_URL")
                .unwrap_or_else(|| BINANCE_API_URL.to_string()),
            binance_api_key: non_empty("BINANCE_API_KEY"),
            telegram,
            channel_name: non_empty("CHANNEL_NAME").unwrap_or_else(|| "Whale Room".to_string()),
            channel_tag: non_empty("CHANNEL_TAG")
                .unwrap_or_else(|| "@WhaleRoomTrade".to_string()),
            run_interval_secs: non_empty("RUN_INTERVAL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
