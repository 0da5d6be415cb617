//! Tab openers backed by the operating system.
//!
//! `SystemBrowser` hands the URL to the platform opener (`open` on macOS,
//! `start` on Windows, `xdg-open` elsewhere). `DryRun` opens nothing, for
//! `--print-only`.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use searchscout_core::{TabError, TabOpener};

/// Opens URLs in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

/// Program and arguments that open `url` on this platform.
pub fn open_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        // The empty string is the window title `start` expects first
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

#[async_trait]
impl TabOpener for SystemBrowser {
    async fn open_tab(&self, url: &str) -> Result<(), TabError> {
        let (program, args) = open_command(url);
        debug!(program, url, "Launching system browser");

        let status = Command::new(program)
            .args(&args)
            .status()
            .await
            .map_err(|e| TabError::OpenFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            info!(url, "Opened browser tab");
            Ok(())
        } else {
            Err(TabError::OpenFailed {
                url: url.to_string(),
                reason: format!("{program} exited with code {:?}", status.code()),
            })
        }
    }
}

/// Accepts every URL without opening anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

#[async_trait]
impl TabOpener for DryRun {
    async fn open_tab(&self, url: &str) -> Result<(), TabError> {
        debug!(url, "Dry run, not opening a tab");
        Ok(())
    }
}
