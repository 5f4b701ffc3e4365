//! One analysis cycle: fetch, analyse, render, deliver.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::services::analysis::{analyze, Analysis};
use crate::services::render::TextRenderer;
use crate::sinks::DeliverySink;
use crate::sources::{CandleQuery, CandleSource};
use crate::types::CandleInterval;

pub struct Runner<S, D> {
    source: S,
    sink: D,
    renderer: TextRenderer,
    symbol: String,
    interval: CandleInterval,
    lookback_days: u32,
}

impl<S: CandleSource, D: DeliverySink> Runner<S, D> {
    pub fn new(
        source: S,
        sink: D,
        renderer: TextRenderer,
        symbol: impl Into<String>,
        interval: CandleInterval,
        lookback_days: u32,
    ) -> Self {
        Self {
            source,
            sink,
            renderer,
            symbol: symbol.into(),
            interval,
            lookback_days,
        }
    }

    /// Runner for the configured pair, window and channel.
    pub fn from_config(source: S, sink: D, config: &Config) -> Self {
        Self::new(
            source,
            sink,
            TextRenderer::new(config.channel_name.clone(), config.channel_tag.clone()),
            config.symbol.clone(),
            config.interval,
            config.lookback_days,
        )
    }

    pub async fn run_once(&self) -> Result<Analysis> {
        self.run_at(Utc::now()).await
    }

    /// Run a cycle for the scheduled loop. The failing stage has already
    /// logged the error, so it is not returned.
    pub async fn run_logged(&self) -> Option<Analysis> {
        self.run_once().await.ok()
    }

    /// Run a cycle as if the current time were `now`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<Analysis> {
        let query = CandleQuery::trailing(self.symbol.clone(), self.interval, self.lookback_days, now);

        let series = self.source.fetch_series(&query).await.map_err(|e| {
            error!(symbol = %self.symbol, "Failed to fetch candles: {}", e);
            e
        })?;

        let analysis = analyze(&series).map_err(|e| {
            error!(symbol = %self.symbol, candles = series.len(), "Analysis failed: {}", e);
            e
        })?;

        let text = self.renderer.render(&analysis.report, now);
        self.sink.deliver(&text).await.map_err(|e| {
            error!("Failed to deliver analysis: {}", e);
            e
        })?;

        info!(
            symbol = %self.symbol,
            stance = ?analysis.guidance.stance,
            "Analysis cycle complete"
        );
        Ok(analysis)
    }
}
