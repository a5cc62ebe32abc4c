pub mod paths;
pub mod preferences;

pub use paths::{AppPaths, expand_folder};
pub use preferences::Preferences;

use crate::error::AppResult;

pub fn load_preferences(paths: &AppPaths) -> AppResult<Preferences> {
    preferences::load(&paths.preferences_file())
}
