//! Content resolver - maps a slug to its pre-rendered HTML body

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Returned for any slug without an entry
pub const PLACEHOLDER: &str = "<p>Content not found.</p>";

lazy_static! {
    static ref BUILTIN: ContentResolver = ContentResolver::from_entries([
        (
            "the-cultivation-alibi",
            include_str!("../../content/posts/the-cultivation-alibi.html"),
        ),
        (
            "the-brics-bridge",
            include_str!("../../content/posts/the-brics-bridge.html"),
        ),
        (
            "the-hyphal-hierarchy",
            include_str!("../../content/posts/the-hyphal-hierarchy.html"),
        ),
        (
            "the-platform-engineers-wager",
            include_str!("../../content/posts/the-platform-engineers-wager.html"),
        ),
    ]);
}

/// Slug to HTML lookup with a placeholder fallback
#[derive(Debug, Clone, Default)]
pub struct ContentResolver {
    entries: HashMap<&'static str, &'static str>,
}

impl ContentResolver {
    /// The compiled-in post bodies
    pub fn builtin() -> &'static ContentResolver {
        &BUILTIN
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Body for `slug`, or [`PLACEHOLDER`]. Never fails.
    pub fn resolve(&self, slug: &str) -> &'static str {
        self.entries.get(slug).copied().unwrap_or(PLACEHOLDER)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }
}
