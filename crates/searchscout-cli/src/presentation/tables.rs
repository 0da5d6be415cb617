//! Table formatting utilities for CLI output.

use searchscout_core::SearchSite;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use searchscout_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Checkbox-style marker for the enabled column.
pub const fn enabled_marker(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

/// Print sites in the order given, one row each.
pub fn print_sites_table(sites: &[SearchSite]) {
    println!(
        "{:<5} {:<3} {:<38} {:<20} {:<8} URL",
        "Order", "On", "ID", "Name", "Default"
    );
    print_separator(110);

    for site in sites {
        println!(
            "{:<5} {:<3} {:<38} {:<20} {:<8} {}",
            site.order,
            enabled_marker(site.enabled),
            truncate_string(&site.id, 37),
            truncate_string(&site.name, 19),
            if site.is_default { "yes" } else { "" },
            site.url
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
    }

    #[test]
    fn test_truncate_string_needs_truncation() {
        assert_eq!(
            truncate_string("this is a very long string", 10),
            "this is..."
        );
    }

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("Überraschung", 8), "Überr...");
    }

    #[test]
    fn test_enabled_marker() {
        assert_eq!(enabled_marker(true), "[x]");
        assert_eq!(enabled_marker(false), "[ ]");
    }
}
