//! Sites command handler.
//!
//! Every subcommand maps onto one editor action. Not-found ids are
//! reported, not failed. When a write fails the authoritative list is
//! shown again so the terminal never displays state that was not saved.

use anyhow::Result;

use searchscout_core::{CoreError, SearchSite};

use crate::bootstrap::CliContext;
use crate::commands::SitesCommand;
use crate::error::CliError;
use crate::presentation::{enabled_marker, print_sites_table};
use crate::utils::input;

/// Execute the sites command.
pub async fn execute(ctx: &CliContext, command: SitesCommand) -> Result<()> {
    match command {
        SitesCommand::List => list(ctx).await,
        SitesCommand::Add { name, url } => add(ctx, &name, &url).await,
        SitesCommand::Edit { id, name, url } => {
            edit(ctx, &id, name.as_deref(), url.as_deref()).await
        }
        SitesCommand::Enable { id } => set_enabled(ctx, &id, true).await,
        SitesCommand::Disable { id } => set_enabled(ctx, &id, false).await,
        SitesCommand::Remove { id, force } => remove(ctx, &id, force).await,
        SitesCommand::Reorder { ids } => reorder(ctx, &ids).await,
    }
}

async fn list(ctx: &CliContext) -> Result<()> {
    let sites = ctx.app().editor().list().await;

    if sites.is_empty() {
        println!("No search sites configured.");
        println!("Use 'searchscout init' to add the default sites.");
        return Ok(());
    }

    println!("{} search site(s):\n", sites.len());
    print_sites_table(&sites);
    Ok(())
}

async fn add(ctx: &CliContext, name: &str, url: &str) -> Result<()> {
    match ctx.app().editor().add(name, url).await {
        Ok(site) => {
            println!("✓ Added '{}' (ID {})", site.name, site.id);
            Ok(())
        }
        Err(err) => save_failed(ctx, err).await,
    }
}

async fn edit(ctx: &CliContext, id: &str, name: Option<&str>, url: Option<&str>) -> Result<()> {
    if name.is_none() && url.is_none() {
        println!("Nothing to change. Pass --name and/or --url.");
        return Ok(());
    }
    let Some(current) = ctx.app().sites().find(id).await else {
        return not_found(id);
    };

    let name = name.unwrap_or(&current.name);
    let url = url.unwrap_or(&current.url);
    match ctx.app().editor().update(id, name, url).await {
        Ok(Some(site)) => {
            println!("✓ Updated '{}'", site.name);
            Ok(())
        }
        Ok(None) => not_found(id),
        Err(err) => save_failed(ctx, err).await,
    }
}

async fn set_enabled(ctx: &CliContext, id: &str, enabled: bool) -> Result<()> {
    match ctx.app().editor().set_enabled(id, enabled).await {
        Ok(Some(site)) => {
            println!("{} {}", enabled_marker(site.enabled), site.name);
            Ok(())
        }
        Ok(None) => not_found(id),
        Err(err) => save_failed(ctx, err).await,
    }
}

async fn remove(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    let Some(site) = ctx.app().sites().find(id).await else {
        return not_found(id);
    };

    if !force && !site.is_default {
        display_site(&site);
        println!();

        let confirm =
            input::prompt_confirmation("Are you sure you want to delete this search site?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    match ctx.app().editor().delete(id).await {
        Ok(true) => {
            println!("✓ Removed '{}'", site.name);
            Ok(())
        }
        Ok(false) => not_found(id),
        Err(err) => save_failed(ctx, err).await,
    }
}

async fn reorder(ctx: &CliContext, ids: &[String]) -> Result<()> {
    match ctx.app().editor().reorder(ids).await {
        Ok(sites) => {
            println!("✓ Saved new order:\n");
            print_sites_table(&sites);
            Ok(())
        }
        Err(err) => save_failed(ctx, err).await,
    }
}

fn display_site(site: &SearchSite) {
    println!("Name: {}", site.name);
    println!("URL:  {}", site.url);
    println!("ID:   {}", site.id);
}

fn not_found(id: &str) -> Result<()> {
    println!("No site found with ID: '{id}'");
    println!("Use 'searchscout sites list' to see available sites.");
    Ok(())
}

/// Report a failed edit. Storage failures re-list what is actually stored.
async fn save_failed(ctx: &CliContext, err: CoreError) -> Result<()> {
    if matches!(err, CoreError::Repository(_)) {
        eprintln!("Failed to save. Please try again.");
        list(ctx).await?;
    }
    Err(CliError::from(err).into())
}
