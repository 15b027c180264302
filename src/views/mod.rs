//! Page views - pure functions of the catalog, the content and the config
//!
//! Each view returns a complete HTML document. Both the HTTP server and the
//! static generator render through this type.

use anyhow::Result;
use tera::Context;

use crate::content::Post;
use crate::helpers::{full_url_for, menu_href, url_for};
use crate::templates::{MenuLink, PostData, SiteData, TemplateRenderer};
use crate::Blog;

/// Outcome of navigating to `/posts/{slug}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostPage {
    /// A catalog record exists; `content` is its resolved body
    Found {
        post: &'static Post,
        content: &'static str,
    },
    /// No catalog record carries the slug
    NotFound,
}

impl PostPage {
    pub fn is_found(&self) -> bool {
        matches!(self, PostPage::Found { .. })
    }
}

/// Renders every page of the site
pub struct Views {
    blog: Blog,
    renderer: TemplateRenderer,
    site: SiteData,
}

impl Views {
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let site = build_site_data(blog);

        Ok(Self {
            blog: blog.clone(),
            renderer,
            site,
        })
    }

    pub fn blog(&self) -> &Blog {
        &self.blog
    }

    /// Home page: introduction plus the most recent posts
    pub fn home(&self) -> Result<String> {
        let recent = self.blog.catalog.recent(self.blog.config.recent_posts);
        let mut context = self.context("/");
        context.insert("posts", &self.post_data(recent));
        self.renderer.render("home.html", &context)
    }

    pub fn about(&self) -> Result<String> {
        let context = self.context("/about/");
        self.renderer.render("about.html", &context)
    }

    /// Full listing of every post
    pub fn posts(&self) -> Result<String> {
        let mut context = self.context("/posts/");
        context.insert("posts", &self.post_data(self.blog.catalog.all()));
        self.renderer.render("posts.html", &context)
    }

    /// Decide the detail state for `slug`.
    ///
    /// A missing record short-circuits before the content lookup.
    pub fn lookup(&self, slug: &str) -> PostPage {
        match self.blog.catalog.find(slug) {
            Some(post) => PostPage::Found {
                post,
                content: self.blog.content.resolve(post.slug),
            },
            None => PostPage::NotFound,
        }
    }

    /// Render a detail state
    pub fn post(&self, page: &PostPage) -> Result<String> {
        match page {
            PostPage::Found { post, content } => {
                let mut context = self.context(&post.path());
                context.insert("post", &self.to_post_data(post));
                context.insert("content", content);
                self.renderer.render("post.html", &context)
            }
            PostPage::NotFound => {
                let mut context = self.context("/posts/");
                context.insert("posts_href", &url_for(&self.blog.config, "/posts/"));
                self.renderer.render("post_not_found.html", &context)
            }
        }
    }

    /// Page for any path outside the routing table
    pub fn not_found(&self) -> Result<String> {
        let context = self.context("/404.html");
        self.renderer.render("not_found.html", &context)
    }

    fn context(&self, path: &str) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("canonical", &full_url_for(&self.blog.config, path));
        context
    }

    fn post_data(&self, posts: &[Post]) -> Vec<PostData> {
        posts.iter().map(|p| self.to_post_data(p)).collect()
    }

    fn to_post_data(&self, post: &Post) -> PostData {
        PostData {
            slug: post.slug.to_string(),
            title: post.title.to_string(),
            subtitle: post.subtitle.map(str::to_string),
            date: post.date.to_string(),
            tags: post.tags.iter().map(|t| t.to_string()).collect(),
            href: url_for(&self.blog.config, &post.path()),
        }
    }
}

fn build_site_data(blog: &Blog) -> SiteData {
    let config = &blog.config;
    SiteData {
        title: config.title.clone(),
        tagline: config.tagline.clone(),
        description: config.description.clone(),
        author: config.author.clone(),
        language: config.language.clone(),
        home: url_for(config, "/"),
        menu: config
            .menu
            .iter()
            .map(|item| MenuLink {
                name: item.name.clone(),
                href: menu_href(config, item),
                external: item.external,
            })
            .collect(),
        footer: config.footer.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Catalog, ContentResolver};

    static AB: &[Post] = &[
        Post {
            slug: "a",
            title: "Alpha",
            subtitle: Some("First of two"),
            date: "2026-01-02",
            tags: &["x", "x"],
        },
        Post {
            slug: "b",
            title: "Beta",
            subtitle: None,
            date: "2026-01-01",
            tags: &[],
        },
    ];

    fn views_with(config: SiteConfig) -> Views {
        let content: &'static ContentResolver = Box::leak(Box::new(
            ContentResolver::from_entries([
                ("a", "<p>alpha body</p>"),
                ("missing", "<p>orphan body</p>"),
            ]),
        ));
        let blog = Blog::with_config("/tmp", config).with_content(Catalog::new(AB), content);
        Views::new(&blog).unwrap()
    }

    fn views() -> Views {
        views_with(SiteConfig::default())
    }

    #[test]
    fn test_lookup_found_matches_record() {
        let views = views();
        for post in AB {
            match views.lookup(post.slug) {
                PostPage::Found { post: found, .. } => {
                    assert_eq!(found.title, post.title);
                    assert_eq!(found.date, post.date);
                }
                PostPage::NotFound => panic!("{} should be found", post.slug),
            }
        }
    }

    #[test]
    fn test_lookup_ignores_orphan_content() {
        // "missing" has a content entry but no catalog record
        assert_eq!(views().lookup("missing"), PostPage::NotFound);
        assert!(!views().lookup("missing").is_found());
    }

    #[test]
    fn test_found_post_without_content_gets_placeholder() {
        let page = views().lookup("b");
        assert!(matches!(
            page,
            PostPage::Found {
                content: crate::content::resolver::PLACEHOLDER,
                ..
            }
        ));
    }

    #[test]
    fn test_render_found_post() {
        let views = views();
        let html = views.post(&views.lookup("a")).unwrap();
        assert!(html.contains("<h1>Alpha</h1>"));
        assert!(html.contains(r#"<time class="date" datetime="2026-01-02">2026-01-02</time>"#));
        assert!(html.contains(r#"<p class="subtitle">First of two</p>"#));
        assert!(html.contains("<p>alpha body</p>"));
        assert!(html.contains("<title>Alpha | krzy.ai</title>"));
    }

    #[test]
    fn test_duplicate_tags_render_twice() {
        let views = views();
        let html = views.post(&views.lookup("a")).unwrap();
        assert_eq!(html.matches(r#"<span class="tag">x</span>"#).count(), 2);
    }

    #[test]
    fn test_post_without_tags_or_subtitle() {
        let views = views();
        let html = views.post(&views.lookup("b")).unwrap();
        assert!(html.contains("<h1>Beta</h1>"));
        assert!(!html.contains(r#"class="tags""#));
        assert!(!html.contains(r#"<p class="subtitle">"#));
        assert!(html.contains("<p>Content not found.</p>"));
    }

    #[test]
    fn test_render_not_found_post() {
        let views = views();
        let html = views.post(&PostPage::NotFound).unwrap();
        assert!(html.contains("<h1>Post Not Found</h1>"));
        assert!(html.contains(r#"<a href="/posts/" class="link">Back to posts</a>"#));
        assert!(!html.contains("orphan body"));
    }

    #[test]
    fn test_home_lists_recent_posts() {
        let mut config = SiteConfig::default();
        config.recent_posts = 1;
        let html = views_with(config).home().unwrap();
        assert!(html.contains("Recent Critiques"));
        assert!(html.contains(r#"<a href="/posts/a/" class="link">Alpha</a>"#));
        assert!(!html.contains("Beta"));
    }

    #[test]
    fn test_posts_lists_everything_in_order() {
        let html = views().posts().unwrap();
        let alpha = html.find(">Alpha</a>").unwrap();
        let beta = html.find(">Beta</a>").unwrap();
        assert!(alpha < beta);
        assert!(html.contains("&mdash; First of two"));
        assert_eq!(html.matches(r#"class="subtitle""#).count(), 1);
    }

    #[test]
    fn test_links_honor_root() {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        let views = views_with(config);

        let html = views.posts().unwrap();
        assert!(html.contains(r#"href="/blog/posts/a/""#));
        assert!(html.contains(r#"<a href="/blog/" class="brand">"#));

        let html = views.post(&PostPage::NotFound).unwrap();
        assert!(html.contains(r#"<a href="/blog/posts/" class="link">Back to posts</a>"#));
    }

    #[test]
    fn test_static_pages() {
        let views = views();
        let about = views.about().unwrap();
        assert!(about.contains("<h1>About krzy.ai</h1>"));
        assert!(about.contains("The Luddite Question"));

        let missing = views.not_found().unwrap();
        assert!(missing.contains("<h1>Page Not Found</h1>"));
    }
}
