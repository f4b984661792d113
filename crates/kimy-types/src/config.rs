//! Application configuration types.
//!
//! Deserialized from `{data_dir}/config.toml`. Every field has a default so
//! a missing or partial file still yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Default bot display name.
pub const DEFAULT_BOT_NAME: &str = "Kimy.IA";

/// Default delay before a scheduled bot reply is appended, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name the bot introduces itself with.
    pub bot_name: String,
    /// Delay applied to every scheduled bot reply.
    pub reply_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}
