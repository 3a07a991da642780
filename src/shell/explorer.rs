//! Opening folders in the system file manager.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Host platform family, as far as folder opening is concerned.
///
/// Exactly three fixed variants — a plain switch, no extensibility needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Unix,
        }
    }

    /// The program that hands a folder to the platform's file manager.
    fn opener(self) -> &'static str {
        match self {
            Platform::Windows => "explorer",
            Platform::MacOs => "open",
            Platform::Unix => "xdg-open",
        }
    }
}

#[derive(Debug, Error)]
enum OpenError {
    #[error("no such folder: {0}")]
    NotFound(PathBuf),
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Open `path` in the system file manager.
///
/// Returns `false` without touching the OS when the path does not exist.
/// Otherwise spawns the platform opener detached — the call does not wait on
/// the child and does not capture its output.  Launch failures are logged at
/// WARN level and collapsed to `false`; this function never panics or errors.
pub fn open_folder(path: &Path) -> bool {
    match try_open(path, Platform::detect()) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not open folder");
            false
        }
    }
}

fn try_open(path: &Path, platform: Platform) -> Result<(), OpenError> {
    if !path.exists() {
        return Err(OpenError::NotFound(path.to_path_buf()));
    }
    let program = platform.opener();
    Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ()) // fire-and-forget: the child outlives this call
        .map_err(|source| OpenError::Launch { program, source })
}
