//! Domain types for searchscout.
//!
//! These are pure data types with no infrastructure dependencies.
//! They represent the core business entities of the extension.

mod defaults;
mod menu;
mod site;

pub use defaults::default_sites;
pub use menu::{MenuClick, MenuContext, MenuItemSpec, MenuTopology, plan_menu};
pub use site::{
    NewSite, SearchSite, SiteUpdate, apply_display_order, compact_order, sorted_by_order,
};
