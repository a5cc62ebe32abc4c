use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::profiles::ini::IniError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Profiles(#[from] LoadError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("profiles.ini not found at {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: IniError,
    },
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("launch command is empty")]
    EmptyCommand,
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}
