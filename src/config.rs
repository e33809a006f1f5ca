use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Target for the qualification relay. Empty string disables the relay.
    pub webhook_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            webhook_url: env::var("WEBHOOK_URL").unwrap_or_default(),
        }
    }
}
