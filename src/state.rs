use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::relay::WebhookSink;

pub struct AppState {
    pub config: AppConfig,
    /// None when no webhook URL is configured. Arc because the qualify
    /// handler clones the sink into a detached delivery task.
    pub webhook: Option<Arc<dyn WebhookSink>>,
}
