use std::env;

/// Tuning for the SSE notification stream.
#[derive(Clone, Debug)]
pub struct NotificationsConfig {
    /// Seconds between keep-alive comment records on idle streams.
    pub keep_alive_secs: u64,
}

impl NotificationsConfig {
    pub fn from_env() -> Self {
        Self {
            keep_alive_secs: env::var("NOTIFY_KEEPALIVE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
