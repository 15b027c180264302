//! Post record

/// Metadata for one article.
///
/// Records are authored as constants, so every field borrows `'static` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    /// Slug (URL segment and lookup key, matched exactly)
    pub slug: &'static str,

    /// Post title
    pub title: &'static str,

    /// Optional line shown under the title
    pub subtitle: Option<&'static str>,

    /// Publication date as `YYYY-MM-DD`
    pub date: &'static str,

    /// Tags in display order, duplicates kept
    pub tags: &'static [&'static str],
}

impl Post {
    /// URL path of the post (without root)
    pub fn path(&self) -> String {
        format!("/posts/{}/", self.slug)
    }
}
