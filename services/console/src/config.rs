//! Configuration types for the console controller

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// URL of the statistics endpoint polled by the stats poller
    #[serde(default = "default_stats_url")]
    pub stats_url: String,
    /// Full-page reload period while auto-refresh is enabled
    #[serde(default = "default_auto_refresh_seconds")]
    pub auto_refresh_seconds: u64,
    /// Quiet window after the last keystroke before a suggestion fires
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            stats_url: default_stats_url(),
            auto_refresh_seconds: default_auto_refresh_seconds(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

fn default_stats_url() -> String {
    "http://127.0.0.1:8081/api/stats".to_string()
}

fn default_auto_refresh_seconds() -> u64 {
    10
}

fn default_search_debounce_ms() -> u64 {
    300
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<ConsoleConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ConsoleError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: ConsoleConfig = serde_json::from_str(&content)?;
    Ok(config)
}
