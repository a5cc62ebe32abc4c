use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AppPaths;

const FILE_FILTER: &str = "zen_profiles=debug";

/// Console logging on stderr plus a debug-level log file in the cache directory.
///
/// The returned guard flushes the file writer on drop. If the log file cannot be
/// created, logging continues on the console only.
pub fn init(paths: &AppPaths, verbose: u8) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_directive(verbose)));
    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file, guard) = match file_writer(paths) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(FILE_FILTER));
            (Some(layer), Some(guard))
        }
        Err(err) => {
            eprintln!("[zen-profiles] file logging disabled: {err}");
            (None, None)
        }
    };

    let _ = tracing_subscriber::registry().with(console).with(file).try_init();
    guard
}

fn console_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "zen_profiles=info",
        1 => "zen_profiles=debug",
        _ => "zen_profiles=trace",
    }
}

fn file_writer(paths: &AppPaths) -> Result<RollingFileAppender, String> {
    let log_file = paths.log_file();
    let dir = log_file
        .parent()
        .ok_or_else(|| format!("log file has no parent: {}", log_file.display()))?;
    let name = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid log file name: {}", log_file.display()))?;

    fs::create_dir_all(dir).map_err(|err| format!("create {}: {err}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::console_directive;

    #[test]
    fn verbosity_raises_console_level() {
        assert_eq!(console_directive(0), "zen_profiles=info");
        assert_eq!(console_directive(1), "zen_profiles=debug");
        assert_eq!(console_directive(4), "zen_profiles=trace");
    }
}
