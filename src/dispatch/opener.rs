//! Open files and folders with the system default application.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

/// Platform "reveal/open" capability, injected into the dispatcher
pub trait Opener: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Shells out to the platform opener
#[derive(Debug, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    #[cfg(target_os = "macos")]
    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new("open").arg(path).status()?;
        if !status.success() {
            anyhow::bail!("open exited with {status}");
        }
        Ok(())
    }

    #[cfg(target_os = "windows")]
    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .status()?;
        if !status.success() {
            anyhow::bail!("start exited with {status}");
        }
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new("xdg-open").arg(path).status()?;
        if !status.success() {
            anyhow::bail!("xdg-open exited with {status}");
        }
        Ok(())
    }
}
