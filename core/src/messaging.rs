//! Outbound WhatsApp delivery through the UltraMsg HTTP API.
//!
//! Compiled only with the `messaging` feature and never registered as an
//! agent tool. Every outcome, failures included, comes back as a
//! human-readable line rather than an error.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::warn;

pub const ULTRAMSG_BASE_URL: &str = "https://api.ultramsg.com";
const COUNTRY_PREFIX: &str = "92";
const MIN_MESSAGE_CHARS: usize = 3;

pub struct MessagingClient {
    client: reqwest::Client,
    base_url: String,
    instance_id: String,
    token: String,
}

impl MessagingClient {
    pub fn new(instance_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: ULTRAMSG_BASE_URL.to_string(),
            instance_id: instance_id.into(),
            token: token.into(),
        }
    }

    /// Reads `INSTANCE_ID` and `API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let instance_id = std::env::var("INSTANCE_ID").context("INSTANCE_ID is not set")?;
        let token = std::env::var("API_TOKEN").context("API_TOKEN is not set")?;
        Ok(Self::new(instance_id, token))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn send(&self, number: &str, message: &str) -> String {
        if message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return "❌ Message is too short to send.".to_string();
        }

        if !number.starts_with(COUNTRY_PREFIX) {
            return "❌ Please provide WhatsApp number in international format (e.g., 923142345678)."
                .to_string();
        }

        let url = format!("{}/{}/messages/chat", self.base_url, self.instance_id);
        let form = [
            ("token", self.token.as_str()),
            ("to", number),
            ("body", message),
        ];

        match self.client.post(url).form(&form).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                format!("📤 Message sent to {}", number)
            }
            Ok(response) => {
                let body = response.text().await.unwrap_or_default();
                warn!("WhatsApp delivery rejected: {}", body);
                format!("❌ Failed: {}", body)
            }
            Err(e) => format!("❌ Exception: {}", e),
        }
    }
}
