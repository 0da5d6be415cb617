//! Menu command handler.
//!
//! Runs the startup trigger, which rebuilds the context menu from stored
//! state, and prints the resulting tree.

use anyhow::Result;

use searchscout_core::RebuildOutcome;

use crate::bootstrap::CliContext;
use crate::presentation::render_menu_tree;

/// Execute the menu command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    match ctx.app().on_startup().await? {
        RebuildOutcome::Rebuilt { items: 0 } => {
            println!("No enabled search sites, the menu is empty.");
            println!("Use 'searchscout init' to restore the defaults or 'searchscout sites enable <ID>'.");
        }
        RebuildOutcome::Rebuilt { .. } => {
            println!("{}", render_menu_tree(&ctx.menu().items().await));
        }
        RebuildOutcome::Skipped => {
            println!("A menu rebuild is already running.");
        }
    }

    Ok(())
}
