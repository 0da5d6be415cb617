//! Main commands enum and subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Seed the default sites if storage is empty and build the menu
    Init,

    /// List, add, edit, toggle, remove or reorder search sites
    Sites {
        #[command(subcommand)]
        command: SitesCommand,
    },

    /// View or change menu settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Rebuild the context menu and print it as a tree
    Menu,

    /// Search text on a site, as if its menu entry was clicked
    Search {
        /// ID of the site to search on
        site_id: String,
        /// Text to search for (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the search URL instead of opening a browser tab
        #[arg(long)]
        print_only: bool,
    },
}

/// Site management command variants.
#[derive(Subcommand)]
pub enum SitesCommand {
    /// Show all sites in display order
    List,
    /// Add a new search site
    Add {
        /// Display name (up to 50 characters)
        name: String,
        /// URL template containing exactly one %s placeholder
        url: String,
    },
    /// Edit the name and/or URL of a site
    Edit {
        /// Site ID
        id: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New URL template
        #[arg(long)]
        url: Option<String>,
    },
    /// Show a site in the context menu
    Enable {
        /// Site ID
        id: String,
    },
    /// Hide a site from the context menu
    Disable {
        /// Site ID
        id: String,
    },
    /// Remove a user-added site
    Remove {
        /// Site ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Set the display order; unlisted sites keep their relative order after these
    Reorder {
        /// Site IDs in the desired order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Update settings
    Set {
        /// Put every site at the top level of the menu instead of under one parent
        #[arg(long)]
        flat_menu: Option<bool>,
    },
}
