use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::DeliverySink;
use crate::error::{AppError, Result};

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Bot API `sendMessage` body.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts reports to a Telegram chat through the Bot API.
#[derive(Clone)]
pub struct TelegramSink {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramSink {
    pub fn new(
        base_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

#[async_trait]
impl DeliverySink for TelegramSink {
    async fn deliver(&self, text: &str) -> Result<()> {
        info!(chat_id = %self.chat_id, "Sending analysis to Telegram");

        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        let body: TelegramResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("Telegram returned {} with unreadable body: {}", status, e);
                return Err(AppError::Delivery(format!("Telegram API error: {}", status)));
            }
        };

        if !status.is_success() || !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| "no description".to_string());
            error!("Telegram rejected message ({}): {}", status, description);
            return Err(AppError::Delivery(format!(
                "Telegram API error {}: {}",
                status, description
            )));
        }

        info!("Analysis sent to Telegram successfully");
        Ok(())
    }
}
