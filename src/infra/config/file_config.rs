use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AdminConfig, AppConfig, ChatConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub chat: Option<FileChatConfig>,
    pub admin: Option<FileAdminConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }

        if let Some(admin) = self.admin {
            admin.merge_into(&mut config.admin);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(dir) = self.dir {
            config.dir = Some(dir);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub author: Option<String>,
    pub ephemeral_ttl_secs: Option<u64>,
    pub typing_indicator_ms: Option<u64>,
    pub seed_greetings: Option<bool>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(author) = self.author {
            config.author = author;
        }

        if let Some(ttl) = self.ephemeral_ttl_secs {
            config.ephemeral_ttl_secs = ttl;
        }

        if let Some(typing_ms) = self.typing_indicator_ms {
            config.typing_indicator_ms = typing_ms;
        }

        if let Some(seed) = self.seed_greetings {
            config.seed_greetings = seed;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAdminConfig {
    pub code_sha256: Option<String>,
}

impl FileAdminConfig {
    fn merge_into(self, config: &mut AdminConfig) {
        if let Some(digest) = self.code_sha256 {
            config.code_sha256 = Some(digest);
        }
    }
}
