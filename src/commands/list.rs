//! List site content

use anyhow::Result;

use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    print!("{}", render(blog, content_type)?);
    Ok(())
}

fn render(blog: &Blog, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = blog.catalog.all();
            out.push_str(&format!("Posts ({}):\n", posts.len()));
            for post in posts {
                out.push_str(&format!("  {} - {} [{}]\n", post.date, post.title, post.slug));
            }
        }
        "tag" | "tags" => {
            let tags = blog.catalog.tag_counts();
            out.push_str(&format!("Tags ({}):\n", tags.len()));
            for (tag, count) in tags {
                out.push_str(&format!("  {} ({})\n", tag, count));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(out)
}
