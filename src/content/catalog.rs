//! Post catalog - the ordered list of every published post
//!
//! The stored order is the display order. Posts are authored newest first and
//! nothing here re-sorts them.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;

use super::{ContentResolver, Post};

/// Every published post, newest first
pub const POSTS: &[Post] = &[
    Post {
        slug: "the-cultivation-alibi",
        title: "The Cultivation Alibi",
        subtitle: Some("On Mycelial Economics, Patient Capital, and the Scalability Excuse"),
        date: "2026-01-01",
        tags: &["economics", "critique", "mycelium", "power", "technology"],
    },
    Post {
        slug: "the-brics-bridge",
        title: "The BRICS Bridge",
        subtitle: Some("On Regenerative Credit, Geopolitical Settlement, and Whose Sovereignty"),
        date: "2026-01-01",
        tags: &["cryptosaint", "critique", "economics", "geopolitics", "power"],
    },
    Post {
        slug: "the-hyphal-hierarchy",
        title: "The Hyphal Hierarchy",
        subtitle: Some("On Mycelium, Agents, and Who Becomes the Hub"),
        date: "2025-12-31",
        tags: &["dol", "enr", "critique", "power", "network"],
    },
    Post {
        slug: "the-platform-engineers-wager",
        title: "The Platform Engineer's Wager",
        subtitle: Some("Univrs.io and the Machinery of Hope"),
        date: "2025-12-31",
        tags: &["univrs", "critique", "precedents"],
    },
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An authoring mistake found by [`Catalog::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("duplicate slug '{slug}', only the first record is reachable")]
    DuplicateSlug { slug: String },

    #[error("slug '{slug}' is not a URL-safe token")]
    InvalidSlug { slug: String },

    #[error("post '{slug}' has date '{date}', expected YYYY-MM-DD")]
    InvalidDate { slug: String, date: String },

    #[error("post '{slug}' ({date}) is newer than the post listed before it ({previous})")]
    OutOfOrder {
        slug: String,
        date: String,
        previous: String,
    },

    #[error("post '{slug}' has no content entry")]
    MissingContent { slug: String },
}

/// Read-only view over an ordered slice of posts
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    posts: &'static [Post],
}

impl Catalog {
    /// Wrap an authored list of posts (must already be newest first)
    pub const fn new(posts: &'static [Post]) -> Self {
        Self { posts }
    }

    /// The compiled-in catalog
    pub const fn builtin() -> Self {
        Self::new(POSTS)
    }

    /// The first `n` posts in stored order
    pub fn recent(&self, n: usize) -> &'static [Post] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Every post in stored order
    pub fn all(&self) -> &'static [Post] {
        self.posts
    }

    /// First post whose slug equals `slug` exactly
    pub fn find(&self, slug: &str) -> Option<&'static Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Count posts per tag, most used first (ties by name)
    pub fn tag_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for post in self.posts {
            let unique: HashSet<&'static str> = post.tags.iter().copied().collect();
            for tag in unique {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        counts
    }

    /// Check the authoring rules against the catalog and its content
    pub fn validate(&self, resolver: &ContentResolver) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut previous: Option<(NaiveDate, &str)> = None;

        for post in self.posts {
            if !seen.insert(post.slug) {
                issues.push(CatalogIssue::DuplicateSlug {
                    slug: post.slug.to_string(),
                });
            }

            if !is_url_safe(post.slug) {
                issues.push(CatalogIssue::InvalidSlug {
                    slug: post.slug.to_string(),
                });
            }

            match NaiveDate::parse_from_str(post.date, DATE_FORMAT) {
                Ok(date) => {
                    if let Some((prev, prev_raw)) = previous {
                        if date > prev {
                            issues.push(CatalogIssue::OutOfOrder {
                                slug: post.slug.to_string(),
                                date: post.date.to_string(),
                                previous: prev_raw.to_string(),
                            });
                        }
                    }
                    previous = Some((date, post.date));
                }
                Err(_) => issues.push(CatalogIssue::InvalidDate {
                    slug: post.slug.to_string(),
                    date: post.date.to_string(),
                }),
            }

            if !resolver.contains(post.slug) {
                issues.push(CatalogIssue::MissingContent {
                    slug: post.slug.to_string(),
                });
            }
        }

        issues
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A slug is URL-safe when slugifying it changes nothing
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && slug::slugify(slug) == slug
}
