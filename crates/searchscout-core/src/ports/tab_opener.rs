//! Tab opening port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the host when opening a tab.
#[derive(Debug, Error)]
pub enum TabError {
    /// The host refused or failed to open the URL.
    #[error("Failed to open tab for {url}: {reason}")]
    OpenFailed { url: String, reason: String },
}

/// Opens a URL in a new browser tab.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TabOpener: Send + Sync {
    async fn open_tab(&self, url: &str) -> Result<(), TabError>;
}
