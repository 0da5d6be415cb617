//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod menu_tree;
pub mod tables;

// Re-export commonly used items
pub use menu_tree::render_menu_tree;
pub use tables::{enabled_marker, print_separator, print_sites_table, truncate_string};
