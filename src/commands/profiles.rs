use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::profiles::{self, ProfileName};

#[derive(Debug, Serialize)]
struct ProfileListing {
    path: String,
    profiles: Vec<ProfileName>,
}

/// Diagnostic listing: unlike `query`, load errors are reported to the caller.
pub fn run(ctx: &AppContext) -> AppResult<()> {
    let folder = ctx.preferences.zen_folder()?;
    let path = profiles::reader::profiles_file(&folder);
    let names = profiles::read_profiles(&folder)?;

    let lines = if names.is_empty() {
        vec![format!("0 profiles in {}", path.display())]
    } else {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {name}", index + 1))
            .collect()
    };

    let listing = ProfileListing {
        path: path.display().to_string(),
        profiles: names,
    };
    ctx.output.emit(&lines, &listing)
}
