//! Generator module - writes every page of the site as static HTML

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::views::Views;
use crate::Blog;

/// Static site generator
pub struct Generator {
    views: Views,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            views: Views::new(blog)?,
        })
    }

    /// Generate the entire site, returning the number of pages written
    pub fn generate(&self) -> Result<usize> {
        let public_dir = &self.views.blog().public_dir;
        fs::create_dir_all(public_dir)?;

        let mut written = 0;

        write_page(public_dir, "index.html", &self.views.home()?)?;
        write_page(public_dir, "about/index.html", &self.views.about()?)?;
        write_page(public_dir, "posts/index.html", &self.views.posts()?)?;
        written += 3;

        written += self.generate_post_pages(public_dir)?;

        write_page(public_dir, "404.html", &self.views.not_found()?)?;
        written += 1;

        Ok(written)
    }

    /// One page per catalog record; orphan content gets no page
    fn generate_post_pages(&self, public_dir: &Path) -> Result<usize> {
        let mut written = 0;

        for post in self.views.blog().catalog.all() {
            if !self.views.blog().content.contains(post.slug) {
                tracing::warn!("Post '{}' has no content, writing placeholder", post.slug);
            }

            let html = self.views.post(&self.views.lookup(post.slug))?;
            write_page(public_dir, &format!("posts/{}/index.html", post.slug), &html)?;
            written += 1;
        }

        Ok(written)
    }
}

fn write_page(public_dir: &Path, relative: &str, html: &str) -> Result<()> {
    let output_path = public_dir.join(relative);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, html)?;
    tracing::debug!("Generated {}", relative);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_generate_builtin_site() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());

        let written = Generator::new(&blog).unwrap().generate().unwrap();
        assert_eq!(written, 4 + blog.catalog.len());

        let public = dir.path().join("public");
        for page in ["index.html", "about/index.html", "posts/index.html", "404.html"] {
            assert!(public.join(page).is_file(), "missing {}", page);
        }
        for post in blog.catalog.all() {
            let html =
                fs::read_to_string(public.join("posts").join(post.slug).join("index.html"))
                    .unwrap();
            assert!(html.contains(post.title));
            assert!(html.contains(blog.content.resolve(post.slug)));
        }
    }

    #[test]
    fn test_home_page_links_every_recent_post() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        Generator::new(&blog).unwrap().generate().unwrap();

        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        for post in blog.catalog.recent(blog.config.recent_posts) {
            assert!(home.contains(&format!(r#"href="/posts/{}/""#, post.slug)));
        }
    }
}
