use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whale_room::sinks::{AnySink, ConsoleSink, TelegramSink};
use whale_room::sources::BinanceClient;
use whale_room::{Config, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whale_room=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting Whale Room analysis for {} ({})",
        config.symbol,
        config.interval.code()
    );

    let source = BinanceClient::new(config.binance_api_url.clone(), config.binance_api_key.clone());
    let sink = match config.telegram {
        Some(ref telegram) => {
            info!("Delivering to Telegram channel {}", telegram.channel_id);
            AnySink::Telegram(TelegramSink::new(
                telegram.api_url.clone(),
                telegram.bot_token.clone(),
                telegram.channel_id.clone(),
            ))
        }
        None => {
            info!("Telegram not configured, printing to stdout");
            AnySink::Console(ConsoleSink::new())
        }
    };

    let runner = Runner::from_config(source, sink, &config);

    if config.run_interval_secs == 0 {
        runner.run_once().await?;
        return Ok(());
    }

    info!("Running every {} seconds", config.run_interval_secs);
    let mut interval = tokio::time::interval(Duration::from_secs(config.run_interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                runner.run_logged().await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
