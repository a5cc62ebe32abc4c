use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{self, AppPaths, Preferences};
use crate::dispatcher::DefaultDispatcher;
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub preferences: Preferences,
    pub output: Output,
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn bootstrap(
        json: bool,
        verbose: u8,
        zen_folder: Option<String>,
        zen_cmd: Option<String>,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let log_guard = logging::init(&paths, verbose);
        let preferences =
            config::load_preferences(&paths)?.with_overrides(zen_folder, zen_cmd);
        debug!(?preferences, log_file = %paths.log_file().display(), "context ready");
        let output = Output::new(json);

        Ok(Self {
            preferences,
            output,
            _log_guard: log_guard,
        })
    }

    pub fn dispatcher(&self) -> DefaultDispatcher {
        DefaultDispatcher::from_preferences(self.preferences.clone())
    }
}
