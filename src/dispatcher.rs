use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::Preferences;
use crate::error::AppResult;
use crate::launcher::{Launcher, ProcessLauncher};
use crate::profiles::{IniProfileReader, ProfileName, ProfileSource};

pub const NO_PROFILES_TITLE: &str = "No profiles found";
pub const ERROR_TITLE: &str = "Error occurred";
const PROFILE_FLAG: &str = "-p";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItem {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub payload: String,
}

impl ResultItem {
    pub fn is_placeholder(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Cached profile list.
///
/// An empty `Loaded` list and a `LoadFailed` state are both retried on the next
/// query, so a profiles file that appears later is picked up without a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileCache {
    #[default]
    NotLoaded,
    Loaded(Vec<ProfileName>),
    LoadFailed(String),
}

impl ProfileCache {
    pub fn needs_load(&self) -> bool {
        match self {
            Self::NotLoaded | Self::LoadFailed(_) => true,
            Self::Loaded(profiles) => profiles.is_empty(),
        }
    }

    pub fn profiles(&self) -> &[ProfileName] {
        match self {
            Self::Loaded(profiles) => profiles.as_slice(),
            Self::NotLoaded | Self::LoadFailed(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Skipped,
    Launched,
}

pub type DefaultDispatcher = QueryDispatcher<IniProfileReader, ProcessLauncher>;

pub struct QueryDispatcher<S, L> {
    source: S,
    launcher: L,
    preferences: Preferences,
    cache: ProfileCache,
}

impl DefaultDispatcher {
    pub fn from_preferences(preferences: Preferences) -> Self {
        Self::new(IniProfileReader, ProcessLauncher, preferences)
    }
}

impl<S: ProfileSource, L: Launcher> QueryDispatcher<S, L> {
    pub fn new(source: S, launcher: L, preferences: Preferences) -> Self {
        Self {
            source,
            launcher,
            preferences,
            cache: ProfileCache::NotLoaded,
        }
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Never fails: unexpected errors become a single "Error occurred" item.
    pub fn query(&mut self, text: Option<&str>) -> Vec<ResultItem> {
        match self.try_query(text) {
            Ok(items) => items,
            Err(err) => {
                error!("error handling query: {err}");
                vec![self.placeholder(ERROR_TITLE, err.to_string())]
            }
        }
    }

    fn try_query(&mut self, text: Option<&str>) -> AppResult<Vec<ResultItem>> {
        if self.cache.needs_load() {
            self.reload()?;
        }

        let needle = normalize_query(text);
        let matches = filter_profiles(self.cache.profiles(), needle.as_deref());
        if let Some(needle) = needle.as_deref() {
            debug!(query = needle, matches = ?matches, "filtered profiles");
        }

        let app = self.preferences.app_name();
        let mut items = matches
            .into_iter()
            .map(|name| ResultItem {
                icon: self.preferences.icon().to_string(),
                name: name.clone(),
                description: format!("Launch {app} with {name} profile"),
                payload: name.clone(),
            })
            .collect::<Vec<_>>();

        if items.is_empty() {
            items.push(self.placeholder(
                NO_PROFILES_TITLE,
                format!("Check your {app} profiles folder path"),
            ));
        }
        Ok(items)
    }

    fn reload(&mut self) -> AppResult<()> {
        let folder = self.preferences.zen_folder()?;
        self.cache = match self.source.load(&folder) {
            Ok(profiles) => ProfileCache::Loaded(profiles),
            Err(err) => {
                error!("error reading profiles: {err}");
                ProfileCache::LoadFailed(err.to_string())
            }
        };
        Ok(())
    }

    /// Launches `<zen_cmd> -p <payload>`. An empty payload is a no-op.
    pub fn select(&self, payload: &str) -> AppResult<Selection> {
        if payload.is_empty() {
            return Ok(Selection::Skipped);
        }

        let command = self.preferences.zen_cmd()?;
        info!(
            profile = payload,
            "launching {} with profile",
            self.preferences.app_name()
        );
        self.launcher.launch(command, &[PROFILE_FLAG, payload])?;
        Ok(Selection::Launched)
    }

    /// Like [`select`](Self::select), but failures are only logged.
    pub fn handle_select(&self, payload: &str) {
        if let Err(err) = self.select(payload) {
            error!("error launching {}: {err}", self.preferences.app_name());
        }
    }

    fn placeholder(&self, name: &str, description: String) -> ResultItem {
        ResultItem {
            icon: self.preferences.icon().to_string(),
            name: name.to_string(),
            description,
            payload: String::new(),
        }
    }
}

/// Trimmed and lowercased; `None` when there is nothing to filter on.
pub fn normalize_query(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

pub fn filter_profiles<'a>(
    profiles: &'a [ProfileName],
    needle: Option<&str>,
) -> Vec<&'a ProfileName> {
    match needle {
        None => profiles.iter().collect(),
        Some(needle) => profiles
            .iter()
            .filter(|name| name.to_lowercase().contains(needle))
            .collect(),
    }
}
