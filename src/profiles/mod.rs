pub mod ini;
pub mod reader;

pub use reader::{IniProfileReader, ProfileSource, load, read_profiles};

/// A profile's `Name` value, passed through unmodified. Empty means "no selection".
pub type ProfileName = String;
