use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "zen-profiles";
const PREFERENCES_FILE: &str = "preferences.json";
const LOG_FILE: &str = "zen_profiles.log";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    cache_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AppError::Config("unable to resolve cache directory".to_string()))?;

        Ok(Self {
            config_dir: config_root.join(APP_DIR),
            cache_dir,
        })
    }

    pub fn new(config_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.cache_dir.join(LOG_FILE)
    }
}

/// Home-directory expansion only; `$VARS` are left untouched.
pub fn expand_folder(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
