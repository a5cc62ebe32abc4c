#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;
use zen_profiles::config::Preferences;
use zen_profiles::error::{LaunchError, LoadError};
use zen_profiles::launcher::Launcher;
use zen_profiles::profiles::{ProfileName, ProfileSource};

pub const SAMPLE_INI: &str = "\
[General]
StartWithLastProfile=1
Version=2

[Profile1]
Name=Work
IsRelative=1
Path=Profiles/abcd.Work

[Profile0]
Name=Personal
IsRelative=1
Path=Profiles/efgh.Personal
Default=1

[Profile2]
Path=Profiles/ijkl.NoName

[profile3]
Name=Testing
Path=Profiles/mnop.Testing

[Install4F96D1932A9F858E]
Default=Profiles/efgh.Personal
Locked=1
";

pub fn zen_folder_with(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("profiles.ini"), contents).expect("write profiles.ini");
    dir
}

pub fn preferences_for(folder: &Path, cmd: &str) -> Preferences {
    Preferences::default().with_overrides(
        Some(folder.to_string_lossy().into_owned()),
        Some(cmd.to_string()),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    pub calls: Rc<RefCell<Vec<LaunchCall>>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &str, args: &[&str]) -> Result<(), LaunchError> {
        self.calls.borrow_mut().push(LaunchCall {
            command: command.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });

        if self.fail {
            return Err(LaunchError::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
        Ok(())
    }
}

/// Serves a fixed list and counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub profiles: Vec<ProfileName>,
    pub loads: Rc<Cell<usize>>,
}

impl StaticSource {
    pub fn new(profiles: &[&str]) -> Self {
        Self {
            profiles: profiles.iter().map(|name| name.to_string()).collect(),
            loads: Rc::default(),
        }
    }
}

impl ProfileSource for StaticSource {
    fn load(&self, _folder: &Path) -> Result<Vec<ProfileName>, LoadError> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.profiles.clone())
    }
}
