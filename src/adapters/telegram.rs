use crate::core::message::format_lead_message;
use crate::core::{ConfigProvider, LeadForm, LeadSink};
use crate::utils::error::{LeadError, Result};
use async_trait::async_trait;
use chrono::FixedOffset;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
    parse_mode: &'static str,
}

/// Relays leads to a chat through the bot `sendMessage` method.
pub struct TelegramSink {
    client: Client,
    api_base: String,
    endpoint: String,
    chat_id: String,
    brand: String,
    offset: FixedOffset,
}

impl TelegramSink {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let offset = FixedOffset::east_opt(config.utc_offset_minutes() * 60).ok_or_else(|| {
            LeadError::InvalidConfigValueError {
                field: "message.utc_offset_minutes".to_string(),
                value: config.utc_offset_minutes().to_string(),
                reason: "Offset out of range".to_string(),
            }
        })?;

        let api_base = config.api_base().trim_end_matches('/').to_string();
        let endpoint = format!("{}/bot{}/sendMessage", api_base, config.bot_token());

        Ok(Self {
            client,
            api_base,
            endpoint,
            chat_id: config.chat_id().to_string(),
            brand: config.brand().to_string(),
            offset,
        })
    }
}

#[async_trait]
impl LeadSink for TelegramSink {
    async fn deliver(&self, lead: &LeadForm) -> Result<()> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: format_lead_message(lead, self.offset, &self.brand),
            parse_mode: "HTML",
        };

        // the endpoint embeds the bot token, so only the base is logged
        tracing::debug!("Posting lead to {}", self.api_base);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        tracing::debug!("Messaging API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeadError::DeliveryError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
