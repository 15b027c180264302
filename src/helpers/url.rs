//! URL helper functions

use crate::config::{MenuItem, SiteConfig};

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/posts/") // -> "/blog/posts/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Resolve a menu entry to its href; external links are left untouched
pub fn menu_href(config: &SiteConfig, item: &MenuItem) -> String {
    if item.external || item.path.starts_with("http://") || item.path.starts_with("https://") {
        item.path.clone()
    } else {
        url_for(config, &item.path)
    }
}
