//! Init command handler.
//!
//! Runs the install trigger: seeds the default sites when storage is
//! empty, then builds the menu.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::render_menu_tree;

/// Execute the init command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.app().on_installed().await?;

    let sites = ctx.app().editor().list().await;
    println!(
        "✓ {} search site(s) ready in {}",
        sites.len(),
        ctx.data_root.display()
    );
    println!();
    println!("{}", render_menu_tree(&ctx.menu().items().await));

    Ok(())
}
