//! Breadth-first frontier traversal
//!
//! The frontier is expressed as two generation sets swapped once per
//! iteration: `current` holds the URLs discovered at the previous depth,
//! `next` accumulates the URLs they link to. The depth bound is then just
//! an iteration counter, with no per-URL bookkeeping.
//!
//! Invariants:
//! - the visited set only ever grows, and membership is checked before
//!   every fetch
//! - a URL enters `next` only if it has not been visited
//! - at most `max_depth + 1` generations are processed

use crate::crawler::fetcher::fetch_links;
use reqwest::Client;
use std::collections::HashSet;

/// Walks the link graph breadth-first from the seed
///
/// Fetches are strictly sequential: one page at a time, one generation at
/// a time. All pages at depth *d* are visited before any page first seen
/// at depth *d+1*; within a generation the visit order is whatever the
/// set yields.
///
/// With `max_depth = 0` exactly the seed is fetched; `max_depth = N`
/// allows up to `N + 1` fetch rounds. The walk ends early when a
/// generation comes up empty.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `seed` - The absolute URL the walk starts from
/// * `max_depth` - Maximum link depth to explore
///
/// # Returns
///
/// Every URL that was fetched (or attempted — dead links count too).
/// There is no error channel: per-URL failures are absorbed by the
/// fetcher and the result is always a (possibly singleton) visited set.
pub async fn traverse(client: &Client, seed: &str, max_depth: usize) -> HashSet<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut next: HashSet<String> = HashSet::from([seed.to_string()]);

    for depth in 0..=max_depth {
        let current = std::mem::take(&mut next);
        if current.is_empty() {
            tracing::debug!("Frontier exhausted at depth {}", depth);
            break;
        }

        tracing::info!(
            "Processing generation {} ({} URLs, {} visited so far)",
            depth,
            current.len(),
            visited.len()
        );

        for url in current {
            // insert returns false when the URL was already visited
            if !visited.insert(url.clone()) {
                continue;
            }

            for link in fetch_links(client, &url).await {
                if !visited.contains(&link) {
                    next.insert(link);
                }
            }
        }
    }

    visited
}

// Traversal semantics (depth bound, cycle dedup, early termination) are
// exercised end-to-end against mock servers in tests/crawl_tests.rs
