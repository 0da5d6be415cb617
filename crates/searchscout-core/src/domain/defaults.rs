//! Default search sites seeded on first run.

use super::site::SearchSite;

const DEFAULT_SITES: [(&str, &str, &str); 7] = [
    ("default-google", "Google", "https://www.google.com/search?q=%s"),
    ("default-duckduckgo", "DuckDuckGo", "https://duckduckgo.com/?q=%s"),
    ("default-bing", "Bing", "https://www.bing.com/search?q=%s"),
    (
        "default-wikipedia",
        "Wikipedia",
        "https://en.wikipedia.org/wiki/Special:Search?search=%s",
    ),
    (
        "default-github",
        "GitHub",
        "https://github.com/search?q=%s&type=repositories",
    ),
    (
        "default-stackoverflow",
        "Stack Overflow",
        "https://stackoverflow.com/search?q=%s",
    ),
    (
        "default-youtube",
        "YouTube",
        "https://www.youtube.com/results?search_query=%s",
    ),
];

/// The fixed, ordered set of seeded sites (order `0..6`).
pub fn default_sites() -> Vec<SearchSite> {
    DEFAULT_SITES
        .iter()
        .zip(0u32..)
        .map(|(&(id, name, url), order)| SearchSite {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            enabled: true,
            is_default: true,
            order,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_site;

    #[test]
    fn test_defaults_are_dense_and_flagged() {
        let sites = default_sites();
        assert_eq!(sites.len(), 7);
        for (i, site) in sites.iter().enumerate() {
            assert_eq!(site.order as usize, i);
            assert!(site.is_default);
            assert!(site.enabled);
        }
    }

    #[test]
    fn test_defaults_pass_validation() {
        for site in default_sites() {
            assert!(validate_site(&site.name, &site.url).is_ok(), "{}", site.id);
        }
    }
}
