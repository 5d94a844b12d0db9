// Chunk: docs/chunks/help_link - Help link launching

//! Opens help links in the user's browser.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

/// Opens a URL outside the editor.
pub trait Launcher {
    fn open_url(&mut self, url: &str) -> io::Result<()>;
}

/// Hands the URL to the platform opener (`open`, `xdg-open` or `start`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&mut self, url: &str) -> io::Result<()> {
        let command = if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };

        spawn_detached(command).map(|_| ())
    }
}

/// Spawns `command` with null stdio and reaps it on a background thread.
///
/// Returns the child's process id.
fn spawn_detached(mut command: Command) -> io::Result<u32> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();

    thread::Builder::new()
        .name("launcher-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => debug!(pid, %status, "launcher exited"),
            Err(e) => warn!(pid, "Failed to wait for launcher: {}", e),
        })?;

    Ok(pid)
}
