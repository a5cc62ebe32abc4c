use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::paths::expand_folder;

const DEFAULT_ZEN_FOLDER: &str = "~/.zen";
const DEFAULT_ZEN_CMD: &str = "zen-browser";
const DEFAULT_APP_NAME: &str = "Zen";
const DEFAULT_ICON: &str = "images/icon.png";

/// Host-supplied preferences. Missing keys in the preferences file fall back to
/// the defaults; explicit `null` or blank values are reported when used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub zen_folder: Option<String>,
    pub zen_cmd: Option<String>,
    pub app_name: Option<String>,
    pub icon: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            zen_folder: Some(DEFAULT_ZEN_FOLDER.to_string()),
            zen_cmd: Some(DEFAULT_ZEN_CMD.to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            icon: Some(DEFAULT_ICON.to_string()),
        }
    }
}

impl Preferences {
    /// The tilde-expanded folder expected to hold `profiles.ini`.
    pub fn zen_folder(&self) -> AppResult<PathBuf> {
        let raw = non_blank(self.zen_folder.as_deref())
            .ok_or_else(|| AppError::Config("zen_folder preference is not set".to_string()))?;
        Ok(expand_folder(raw))
    }

    pub fn zen_cmd(&self) -> AppResult<&str> {
        non_blank(self.zen_cmd.as_deref())
            .ok_or_else(|| AppError::Config("zen_cmd preference is not set".to_string()))
    }

    pub fn app_name(&self) -> &str {
        non_blank(self.app_name.as_deref()).unwrap_or(DEFAULT_APP_NAME)
    }

    pub fn icon(&self) -> &str {
        non_blank(self.icon.as_deref()).unwrap_or(DEFAULT_ICON)
    }

    /// Command-line or environment values win over the preferences file.
    pub fn with_overrides(mut self, zen_folder: Option<String>, zen_cmd: Option<String>) -> Self {
        if zen_folder.is_some() {
            self.zen_folder = zen_folder;
        }
        if zen_cmd.is_some() {
            self.zen_cmd = zen_cmd;
        }
        self
    }
}

pub fn load(path: &Path) -> AppResult<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }

    let raw = fs::read_to_string(path)?;
    let preferences = serde_json::from_str(&raw)?;
    Ok(preferences)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
