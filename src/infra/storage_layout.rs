use std::{fs, path::PathBuf};

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "novasphere";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    /// Resolves the per-user data directory, honoring a configured log dir.
    pub fn resolve(logging: &LogConfig) -> Result<Self, AppError> {
        let data_dir = dirs::data_local_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve local data directory (XDG_DATA_HOME/HOME)".into(),
            })?
            .join(APP_DIR_NAME);

        let log_dir = logging
            .dir
            .clone()
            .unwrap_or_else(|| data_dir.join("logs"));

        Ok(Self { data_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
