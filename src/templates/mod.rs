//! Built-in site templates using Tera template engine
//!
//! Every template is embedded in the binary, so rendering never touches the
//! filesystem.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies and footer lines are trusted compiled-in HTML, and Tera's
        // escaper would also rewrite every '/' in hrefs
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("about.html", include_str!("site/about.html")),
            ("posts.html", include_str!("site/posts.html")),
            ("post.html", include_str!("site/post.html")),
            ("post_not_found.html", include_str!("site/post_not_found.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/style.html",
                include_str!("site/partials/style.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub home: String,
    pub menu: Vec<MenuLink>,
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuLink {
    pub name: String,
    pub href: String,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub date: String,
    pub tags: Vec<String>,
    pub href: String,
}
