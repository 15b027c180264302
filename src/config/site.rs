//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,

    // Home page
    pub recent_posts: usize,

    // Chrome
    pub menu: Vec<MenuItem>,
    /// Footer lines, inserted as trusted HTML
    pub footer: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "krzy.ai".to_string(),
            tagline: "Who benefits from this machine?".to_string(),
            description: "The critic's mirror of Univrs.io".to_string(),
            author: "sepahsalar".to_string(),
            language: "en".to_string(),

            url: "https://krzy.ai".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),

            recent_posts: 10,

            menu: vec![
                MenuItem::internal("Posts", "/posts/"),
                MenuItem::internal("About", "/about/"),
                MenuItem::external("Univrs.io", "https://univrs.io"),
            ],
            footer: vec![
                r#"The shadow of <a href="https://univrs.io" class="link">Univrs.io</a>"#
                    .to_string(),
                "Every build contains its critic.".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// A navigation entry in the page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    /// Opens in a new tab and is not rooted under `root`
    #[serde(default)]
    pub external: bool,
}

impl MenuItem {
    pub fn internal(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            external: false,
        }
    }

    pub fn external(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            external: true,
        }
    }
}
