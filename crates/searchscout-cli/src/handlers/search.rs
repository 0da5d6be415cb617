//! Search command handler.
//!
//! Simulates a click on a site's context-menu entry with the given text
//! as the selection.

use anyhow::Result;

use searchscout_core::{DispatchOutcome, MenuClick, MenuTopology};

use crate::bootstrap::CliContext;

/// Execute the search command.
pub async fn execute(
    ctx: &CliContext,
    site_id: &str,
    text: &[String],
    print_only: bool,
) -> Result<()> {
    match click(ctx, site_id, text).await? {
        DispatchOutcome::Opened { url } => {
            if print_only {
                println!("{url}");
            } else {
                println!("Opened {url}");
            }
        }
        DispatchOutcome::UnknownSite => {
            println!("No enabled site with ID: '{site_id}'");
            println!("Use 'searchscout sites list' to see available sites.");
        }
        DispatchOutcome::EmptySelection => {
            println!("Nothing to search for.");
        }
        DispatchOutcome::Ignored => {}
    }

    Ok(())
}

/// Dispatch a click on `site_id` with `text` as the selection.
///
/// The click is shaped like the one the current menu style would produce,
/// so a site that is disabled or missing resolves as a stale menu entry.
async fn click(ctx: &CliContext, site_id: &str, text: &[String]) -> Result<DispatchOutcome> {
    let selection = text.join(" ");
    let settings = ctx.app().editor().settings().await;
    let click = match MenuTopology::from_settings(&settings) {
        MenuTopology::Flat => MenuClick::flat(site_id, selection),
        MenuTopology::Nested => MenuClick::nested(site_id, selection),
    };
    Ok(ctx.app().on_menu_clicked(&click).await?)
}
