use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_FETCH_DELAY;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Catalog fetch tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Simulated fetch latency in milliseconds (default: 1500).
    #[serde(default = "default_fetch_delay_ms")]
    pub delay_ms: u64,
}

impl FetchConfig {
    /// The configured delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_fetch_delay_ms(),
        }
    }
}

fn default_fetch_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY.as_millis() as u64
}
