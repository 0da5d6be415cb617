//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use searchscout_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid user input.
    #[error("{0}")]
    Arguments(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The system browser could not be launched.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Browser(_) => 69,  // EX_UNAVAILABLE
        }
    }

    /// Exit code for any error surfaced by a handler.
    pub fn exit_code_for(err: &anyhow::Error) -> i32 {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.exit_code();
        }
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return Self::from_core(core).exit_code();
        }
        if err.downcast_ref::<std::io::Error>().is_some() {
            return 74;
        }
        1
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Validation(e) => Self::Arguments(e.to_string()),
            CoreError::DefaultSiteProtected(_) => Self::Arguments(err.to_string()),
            CoreError::Menu(e) => Self::Core(e.to_string()),
            CoreError::Tab(e) => Self::Browser(e.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchscout_core::{RepositoryError, SiteValidationError, TabError};

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let validation: CliError = CoreError::Validation(SiteValidationError::EmptyName).into();
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.to_string(), "Name is required.");

        let storage: CliError =
            CoreError::Repository(RepositoryError::Storage("disk full".into())).into();
        assert_eq!(storage.exit_code(), 73);

        let protected: CliError = CoreError::DefaultSiteProtected("Google".into()).into();
        assert_eq!(protected.exit_code(), 2);

        let tab: CliError = CoreError::Tab(TabError::OpenFailed {
            url: "https://example.com".into(),
            reason: "no browser".into(),
        })
        .into();
        assert_eq!(tab.exit_code(), 69);
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let core = anyhow::Error::new(CoreError::Validation(SiteValidationError::InvalidUrl));
        assert_eq!(CliError::exit_code_for(&core), 2);

        let cli = anyhow::Error::new(CliError::Browser("gone".into()));
        assert_eq!(CliError::exit_code_for(&cli), 69);

        assert_eq!(CliError::exit_code_for(&anyhow::anyhow!("other")), 1);

        let io = anyhow::Error::new(std::io::Error::other("stdin closed"));
        assert_eq!(CliError::exit_code_for(&io), 74);
    }
}
