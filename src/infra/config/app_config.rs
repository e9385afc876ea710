use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub chat: ChatConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Directory for rolling log files; resolved from the platform data dir when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    pub author: String,
    pub ephemeral_ttl_secs: u64,
    pub typing_indicator_ms: u64,
    pub seed_greetings: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            author: "You".to_owned(),
            ephemeral_ttl_secs: 30,
            typing_indicator_ms: 1_000,
            seed_greetings: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AdminConfig {
    /// Hex SHA-256 digest of the admin code.
    pub code_sha256: Option<String>,
}
