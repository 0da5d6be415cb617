//! Command-line adapter for searchscout.
//!
//! Stands in for the extension's popup editor and context menu: every
//! editor operation is a subcommand, the menu is rendered as a tree and
//! clicks are simulated with `search`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod browser;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{BrowserMode, CliConfig, CliContext, bootstrap};
pub use commands::{Commands, SettingsCommand, SitesCommand};
pub use error::CliError;
pub use parser::Cli;
