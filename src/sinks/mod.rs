//! Delivery sinks for rendered reports.

pub mod console;
pub mod telegram;

pub use console::ConsoleSink;
pub use telegram::TelegramSink;

use async_trait::async_trait;

use crate::error::Result;

/// Accepts a final rendered text block.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<()>;
}

/// Either configured sink, chosen at startup.
pub enum AnySink {
    Telegram(TelegramSink),
    Console(ConsoleSink),
}

#[async_trait]
impl DeliverySink for AnySink {
    async fn deliver(&self, text: &str) -> Result<()> {
        match self {
            AnySink::Telegram(sink) => sink.deliver(text).await,
            AnySink::Console(sink) => sink.deliver(text).await,
        }
    }
}
