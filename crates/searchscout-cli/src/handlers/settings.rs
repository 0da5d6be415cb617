//! Settings command handler.

use anyhow::Result;

use searchscout_core::{MenuTopology, Settings};

use crate::bootstrap::CliContext;
use crate::commands::SettingsCommand;

/// Execute the settings command.
pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let settings = ctx.app().editor().settings().await;
            print_settings(&settings);
        }
        SettingsCommand::Set { flat_menu } => {
            let Some(flat) = flat_menu else {
                println!("No settings specified. Use --help to see available options.");
                return Ok(());
            };
            let settings = ctx.app().editor().set_flat_menu(flat).await?;
            println!("✓ Settings updated.");
            print_settings(&settings);
        }
    }
    Ok(())
}

fn print_settings(settings: &Settings) {
    let style = match MenuTopology::from_settings(settings) {
        MenuTopology::Flat => "flat (one top-level entry per site)",
        MenuTopology::Nested => "nested (sites under one parent entry)",
    };
    println!("Menu style: {style}");
}
