//! Core services - the extension's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They are pure orchestrators and don't know about concrete implementations.

mod app_core;
mod dispatcher;
mod editor;
mod menu_sync;
mod site_repository;

#[cfg(test)]
mod test_support;

pub use app_core::AppCore;
pub use dispatcher::{DispatchOutcome, SelectionDispatcher};
pub use editor::EditorController;
pub use menu_sync::{MenuSynchronizer, RebuildOutcome, SyncState};
pub use site_repository::SiteRepository;
