//! Crawler module: fetching, link extraction, and frontier traversal
//!
//! Control flow: the traversal engine drives the fetcher per URL, the
//! fetcher drives the extractor per response, and the accumulated visited
//! set becomes the sitemap content.

mod extractor;
mod fetcher;
mod traversal;

pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_links};
pub use traversal::traverse;

use crate::Result;

/// Crawls a site and returns every visited URL
///
/// This is the main entry point: it builds the HTTP client, runs the
/// breadth-first traversal from the seed, and hands back the visited set
/// as a sequence in unspecified order.
///
/// Per-URL fetch failures never surface here; the only error is a failure
/// to construct the HTTP client.
///
/// # Arguments
///
/// * `seed` - The absolute URL to start from
/// * `max_depth` - Maximum link depth to explore (0 visits only the seed)
pub async fn crawl(seed: &str, max_depth: usize) -> Result<Vec<String>> {
    let client = build_http_client()?;
    let visited = traverse(&client, seed, max_depth).await;
    Ok(visited.into_iter().collect())
}
