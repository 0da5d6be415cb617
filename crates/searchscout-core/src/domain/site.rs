//! Search site domain types.

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_TOKEN;

const fn default_enabled() -> bool {
    true
}

/// A configured search provider.
///
/// Serialized with camelCase keys so records written by earlier releases of
/// the extension load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSite {
    /// Opaque identifier. Never changes after creation.
    pub id: String,
    /// Display name, also used as the nested menu entry title.
    pub name: String,
    /// URL template containing exactly one placeholder token.
    pub url: String,
    /// Whether the site appears in the context menu.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seeded sites can be disabled but not deleted.
    #[serde(default)]
    pub is_default: bool,
    /// Zero-based dense display rank.
    #[serde(default)]
    pub order: u32,
}

impl SearchSite {
    /// Build the search URL for a selection.
    ///
    /// The selection is percent-encoded as a URI component and substituted
    /// for the first placeholder token in the template.
    pub fn search_url(&self, selection: &str) -> String {
        self.url
            .replacen(PLACEHOLDER_TOKEN, &encode_component(selection), 1)
    }
}

/// Marks `!'()*` that `urlencoding` escapes but URI components keep literal.
const COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ~ ! ' ( ) *`.
///
/// A literal `%` in the input is always encoded as `%25`, so the escapes
/// rewritten here can only come from the marks themselves.
fn encode_component(text: &str) -> String {
    COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// Input for creating a new site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSite {
    pub name: String,
    pub url: String,
}

impl NewSite {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Partial site update. `None` fields are left unchanged.
///
/// `id`, `is_default` and `order` are deliberately absent: identity is
/// immutable and ordering goes through the reorder operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub enabled: Option<bool>,
}

impl SiteUpdate {
    /// Update that only toggles the enabled flag.
    pub const fn enabled(enabled: bool) -> Self {
        Self {
            name: None,
            url: None,
            enabled: Some(enabled),
        }
    }

    /// Whether this update touches fields covered by validation.
    pub const fn touches_template(&self) -> bool {
        self.name.is_some() || self.url.is_some()
    }

    /// Merge the set fields into `site`.
    pub fn apply(&self, site: &mut SearchSite) {
        if let Some(ref name) = self.name {
            site.name.clone_from(name);
        }
        if let Some(ref url) = self.url {
            site.url.clone_from(url);
        }
        if let Some(enabled) = self.enabled {
            site.enabled = enabled;
        }
    }
}

/// Renumber `order` to `0..N-1`, preserving the existing relative order.
///
/// The storage sequence of `sites` is not changed, only the `order` fields.
/// Ties keep their sequence position.
pub fn compact_order(sites: &mut [SearchSite]) {
    let mut ranked: Vec<usize> = (0..sites.len()).collect();
    ranked.sort_by_key(|&i| sites[i].order);
    for (rank, index) in (0u32..).zip(ranked) {
        sites[index].order = rank;
    }
}

/// Assign `order` from a display sequence of ids.
///
/// Listed ids take positions `0..k-1` in the given order. Sites missing from
/// `ids` follow in their previous relative order. Unknown and repeated ids
/// are ignored. The result is always dense.
pub fn apply_display_order(sites: &mut [SearchSite], ids: &[String]) {
    let mut ranked: Vec<usize> = Vec::with_capacity(sites.len());
    for id in ids {
        if let Some(index) = sites.iter().position(|site| &site.id == id) {
            if !ranked.contains(&index) {
                ranked.push(index);
            }
        }
    }

    let mut rest: Vec<usize> = (0..sites.len()).filter(|i| !ranked.contains(i)).collect();
    rest.sort_by_key(|&i| sites[i].order);
    ranked.extend(rest);

    for (rank, index) in (0u32..).zip(ranked) {
        sites[index].order = rank;
    }
}

/// Sort by `order`, keeping the original sequence position on ties.
pub fn sorted_by_order(mut sites: Vec<SearchSite>) -> Vec<SearchSite> {
    // `sort_by_key` is stable, which is what resolves ties.
    sites.sort_by_key(|site| site.order);
    sites
}
