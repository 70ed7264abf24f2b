//! Opens a finished output file with the platform's default viewer.

use crate::error::FlatcatError;
use std::path::Path;
use std::process::{Child, Command};
#[cfg(feature = "logging")]
use tracing;

/// How to hand a file to the desktop's default application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    Windows,
    Darwin,
    /// `xdg-open`, used on Linux and the BSDs.
    Default,
}

impl Launcher {
    /// Picks the launcher for the host platform.
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &str) -> Self {
        match os {
            "windows" => Launcher::Windows,
            "macos" => Launcher::Darwin,
            _ => Launcher::Default,
        }
    }

    /// The command that opens `path`, not yet started.
    pub fn command(&self, path: &Path) -> Command {
        match self {
            Launcher::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/c", "start", ""]).arg(path);
                cmd
            }
            Launcher::Darwin => {
                let mut cmd = Command::new("open");
                cmd.arg(path);
                cmd
            }
            Launcher::Default => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(path);
                cmd
            }
        }
    }

    /// Starts the viewer and returns without waiting for it to exit.
    pub fn launch(&self, path: &Path) -> Result<Child, FlatcatError> {
        #[cfg(feature = "logging")]
        tracing::debug!("Opening {} with {:?} launcher", path.display(), self);
        self.command(path)
            .spawn()
            .map_err(|e| FlatcatError::ViewerLaunch {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
