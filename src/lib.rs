//! Sitemapper: a same-origin sitemap builder
//!
//! This crate crawls a website breadth-first from a seed URL, restricted to
//! the seed's own origin, and renders every visited page into an XML sitemap
//! document.
//!
//! Per-URL fetch and parse failures are absorbed inside the crawl (a dead
//! link contributes nothing to the frontier but still counts as visited);
//! only seed validation, HTTP client construction, and the final sitemap
//! serialization can fail the run.

pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for sitemapper operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to serialize sitemap: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sitemapper operations
pub type Result<T> = std::result::Result<T, SitemapError>;

// Re-export commonly used types
pub use crate::url::Origin;
pub use crawler::crawl;
pub use output::write_sitemap;
