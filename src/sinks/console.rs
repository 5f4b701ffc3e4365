use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use super::DeliverySink;
use crate::error::{AppError, Result};

/// Writes reports to stdout, one block per delivery.
pub struct ConsoleSink {
    out: Mutex<Stdout>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliverySink for ConsoleSink {
    async fn deliver(&self, text: &str) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(text.as_bytes())
            .await
            .map_err(|e| AppError::Delivery(format!("stdout write failed: {}", e)))?;
        out.write_all(b"\n")
            .await
            .map_err(|e| AppError::Delivery(format!("stdout write failed: {}", e)))?;
        out.flush()
            .await
            .map_err(|e| AppError::Delivery(format!("stdout flush failed: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_delivers() {
        let sink = ConsoleSink::new();
        tokio_test::block_on(async {
            assert!(sink.deliver("report").await.is_ok());
        });
    }
}
