//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Write every page of the site into the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    blog.warn_catalog_issues();

    let generator = Generator::new(blog)?;
    let written = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages into {:?} in {:.2}s",
        written,
        blog.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
