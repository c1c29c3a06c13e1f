//! Discovery configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between failed lookup attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Default preferred transport tag
pub const DEFAULT_TRANSPORT: &str = "webtransport";

/// Discovery configuration
///
/// The defaults reproduce the reference behavior: a fixed 10-second delay
/// between lookup attempts, no retry cap (liveness over bounded latency),
/// and WebTransport as the preferred dial transport. Deployments wanting a
/// bounded wait set `max_attempts` or cancel externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Delay between failed lookup attempts
    #[serde(default = "default_retry_delay")]
    pub retry_delay: Duration,

    /// Maximum lookup attempts; `None` retries indefinitely
    #[serde(default)]
    pub max_attempts: Option<u32>,

    /// Preferred transport tag for dial candidates
    #[serde(default = "default_transport")]
    pub transport: String,
}

fn default_retry_delay() -> Duration {
    DEFAULT_RETRY_DELAY
}

fn default_transport() -> String {
    DEFAULT_TRANSPORT.to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            retry_delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
            transport: DEFAULT_TRANSPORT.to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Set the delay between failed lookup attempts
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Cap the number of lookup attempts
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Set the preferred transport tag
    #[must_use]
    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = transport.into();
        self
    }
}
