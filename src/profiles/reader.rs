use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::LoadError;

use super::ini::IniDocument;
use super::ProfileName;

pub const PROFILES_FILE: &str = "profiles.ini";
const PROFILE_SECTION_PREFIX: &str = "Profile";
const NAME_KEY: &str = "Name";

/// Where the dispatcher gets its profile names from.
pub trait ProfileSource {
    fn load(&self, folder: &Path) -> Result<Vec<ProfileName>, LoadError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IniProfileReader;

impl ProfileSource for IniProfileReader {
    fn load(&self, folder: &Path) -> Result<Vec<ProfileName>, LoadError> {
        read_profiles(folder)
    }
}

pub fn profiles_file(folder: &Path) -> PathBuf {
    folder.join(PROFILES_FILE)
}

/// Reads `<folder>/profiles.ini` and returns the `Name` of every `Profile*`
/// section, in file order.
pub fn read_profiles(folder: &Path) -> Result<Vec<ProfileName>, LoadError> {
    let path = profiles_file(folder);
    debug!(path = %path.display(), "reading profiles");

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path));
        }
        Err(source) => return Err(LoadError::Read { path, source }),
    };

    let document =
        IniDocument::parse(&raw).map_err(|source| LoadError::Malformed { path, source })?;

    let profiles = document
        .sections()
        .filter(|section| is_profile_section(section.name()))
        .filter_map(|section| section.get(NAME_KEY))
        .inspect(|name| debug!(profile = %name, "found profile"))
        .map(str::to_string)
        .collect::<Vec<_>>();

    info!(count = profiles.len(), "total profiles found");
    Ok(profiles)
}

/// Never fails: any load error is logged and yields an empty list.
pub fn load(folder: &Path) -> Vec<ProfileName> {
    read_profiles(folder).unwrap_or_else(|err| {
        error!("error reading profiles: {err}");
        Vec::new()
    })
}

fn is_profile_section(name: &str) -> bool {
    name.get(..PROFILE_SECTION_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PROFILE_SECTION_PREFIX))
}
