//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access the store directly
//! - Contain business logic
//! - Manage database connections

pub mod init;
pub mod menu;
pub mod search;
pub mod settings;
pub mod sites;
