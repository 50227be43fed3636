//! Chart Display
//!
//! Opens a rendered chart in the platform file viewer. The call waits on
//! the viewer command, so the next chart appears only after the current
//! one is dismissed.

use std::path::Path;
use std::process::Command;

use log::debug;
use thiserror::Error;

/// Failures launching or running the viewer.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to launch viewer '{viewer}': {source}")]
    Spawn {
        viewer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("viewer '{viewer}' exited with {status}")]
    Viewer {
        viewer: String,
        status: std::process::ExitStatus,
    },
}

/// Platform command used to open a file in the default viewer.
#[cfg(target_os = "macos")]
const VIEWER_COMMAND: &[&str] = &["open", "-W"];
#[cfg(target_os = "windows")]
const VIEWER_COMMAND: &[&str] = &["cmd", "/C", "start", "/WAIT", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const VIEWER_COMMAND: &[&str] = &["xdg-open"];

/// Opens a chart file and blocks until the viewer command exits.
///
/// How long the call blocks depends on the platform opener: `open -W`
/// waits for the viewer window, while `xdg-open` returns once the file
/// is handed to an already-running viewer instance.
pub fn show_svg(path: &Path) -> Result<(), DisplayError> {
    let viewer = VIEWER_COMMAND[0].to_string();
    debug!("Opening {} with {}", path.display(), viewer);

    let status = Command::new(VIEWER_COMMAND[0])
        .args(&VIEWER_COMMAND[1..])
        .arg(path)
        .status()
        .map_err(|e| DisplayError::Spawn {
            viewer: viewer.clone(),
            source: e,
        })?;

    if !status.success() {
        return Err(DisplayError::Viewer { viewer, status });
    }

    Ok(())
}
