use std::process::{Child, Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::error::LaunchError;

pub trait Launcher {
    fn launch(&self, command: &str, args: &[&str]) -> Result<(), LaunchError>;
}

/// Starts the target fire-and-forget: no stdio, its own session, never waited on
/// by the caller. A background thread reaps the child once it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &str, args: &[&str]) -> Result<(), LaunchError> {
        let program = command.trim();
        if program.is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;

            // SAFETY: setsid is async-signal-safe and touches no parent state.
            unsafe {
                cmd.pre_exec(|| {
                    nix::unistd::setsid()
                        .map(drop)
                        .map_err(std::io::Error::from)
                });
            }
        }

        let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            command: program.to_string(),
            source,
        })?;
        debug!(pid = child.id(), command = program, "spawned detached process");
        reap_in_background(child);
        Ok(())
    }
}

fn reap_in_background(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || {
            let _ = child.wait();
        });
    if let Err(err) = spawned {
        warn!(pid, "could not start reaper thread: {err}");
    }
}
