//! Check the catalog for authoring mistakes

use anyhow::Result;

use crate::Blog;

/// Print every catalog issue; fails when there is at least one
pub fn run(blog: &Blog) -> Result<()> {
    let issues = blog.check();

    if issues.is_empty() {
        println!(
            "Catalog OK: {} posts, every one with content",
            blog.catalog.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("  {}", issue);
    }
    anyhow::bail!("{} catalog issue(s) found", issues.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Catalog, ContentResolver, Post};

    #[test]
    fn test_check_builtin_passes() {
        let blog = Blog::with_config("/tmp", SiteConfig::default());
        assert!(run(&blog).is_ok());
    }

    #[test]
    fn test_check_fails_on_missing_content() {
        static POSTS: &[Post] = &[Post {
            slug: "lonely",
            title: "Lonely",
            subtitle: None,
            date: "2026-01-01",
            tags: &[],
        }];
        let content: &'static ContentResolver = Box::leak(Box::new(ContentResolver::default()));
        let blog = Blog::with_config("/tmp", SiteConfig::default())
            .with_content(Catalog::new(POSTS), content);

        let err = run(&blog).unwrap_err();
        assert_eq!(err.to_string(), "1 catalog issue(s) found");
    }
}
