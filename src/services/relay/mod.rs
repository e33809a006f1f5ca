pub mod http;

use async_trait::async_trait;

/// Outbound notification target for completed qualifications. Delivery is
/// best-effort; callers are expected to discard the result.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn deliver(&self, payload: serde_json::Value) -> anyhow::Result<()>;
}
