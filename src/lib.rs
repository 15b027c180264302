//! krzy: the krzy.ai blog
//!
//! A fixed catalog of essays compiled into the binary, rendered through
//! embedded Tera templates, and either served over HTTP or written out as a
//! static site.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Catalog, CatalogIssue, ContentResolver};

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Post metadata, newest first
    pub catalog: Catalog,
    /// Post bodies by slug
    pub content: &'static ContentResolver,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog over the built-in posts with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            public_dir,
            catalog: Catalog::builtin(),
            content: ContentResolver::builtin(),
        }
    }

    /// Swap in another catalog and content set
    pub fn with_content(mut self, catalog: Catalog, content: &'static ContentResolver) -> Self {
        self.catalog = catalog;
        self.content = content;
        self
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Authoring problems in the catalog
    pub fn check(&self) -> Vec<CatalogIssue> {
        self.catalog.validate(self.content)
    }

    /// Log every catalog problem as a warning, returning how many were found
    pub fn warn_catalog_issues(&self) -> usize {
        let issues = self.check();
        for issue in &issues {
            tracing::warn!("Catalog: {}", issue);
        }
        issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "krzy.ai");
        assert_eq!(blog.public_dir, dir.path().join("public"));
        assert!(blog.check().is_empty());
    }

    #[test]
    fn test_warn_catalog_issues_counts() {
        use content::Post;

        static POSTS: &[Post] = &[Post {
            slug: "no-body",
            title: "No Body",
            subtitle: None,
            date: "2026-01-01",
            tags: &[],
        }];
        let content: &'static ContentResolver = Box::leak(Box::new(ContentResolver::default()));

        let builtin = Blog::with_config("/tmp", config::SiteConfig::default());
        assert_eq!(builtin.warn_catalog_issues(), 0);

        let broken = builtin.with_content(Catalog::new(POSTS), content);
        assert_eq!(broken.warn_catalog_issues(), 1);
    }

    #[test]
    fn test_new_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "public_dir: site\n").unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.public_dir, dir.path().join("site"));
    }

    #[test]
    fn test_new_rejects_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "recent_posts: [1, 2]\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
