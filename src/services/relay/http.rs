use anyhow::Context;
use async_trait::async_trait;

use super::WebhookSink;

pub struct HttpWebhookSink {
    url: String,
    client: reqwest::Client,
}

impl HttpWebhookSink {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WebhookSink for HttpWebhookSink {
    async fn deliver(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .context("failed to reach webhook target")?
            .error_for_status()
            .context("webhook target returned error")?;

        Ok(())
    }
}
