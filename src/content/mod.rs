//! Content module - the post catalog and the per-slug content blobs

pub mod catalog;
mod post;
pub mod resolver;

pub use catalog::{Catalog, CatalogIssue};
pub use post::Post;
pub use resolver::ContentResolver;
