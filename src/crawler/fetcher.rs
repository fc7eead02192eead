//! HTTP page fetching
//!
//! One GET per URL, redirects followed by the client, and the page's
//! origin derived from the final resolved response URL rather than the
//! URL that was requested. A page reached through a redirect is therefore
//! scoped to the redirect target's site.
//!
//! Every failure on this path — DNS, connection refused, TLS, a body that
//! cannot be read — is absorbed as an empty link list so the crawl keeps
//! going. Non-2xx statuses are not treated as failures either: whatever
//! body the server sent is parsed like any other page.

use crate::crawler::extractor::extract_links;
use crate::url::Origin;
use reqwest::Client;

/// Builds the HTTP client used for the whole crawl
///
/// Default redirect policy (follow, up to 10 hops), no custom headers, no
/// timeout beyond the platform default.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Fetches a page and returns the same-origin links found on it
///
/// The extractor already scopes root-relative hrefs to the page's origin,
/// but absolute links from the page body can point anywhere, so the
/// result is filtered against the resolved origin prefix as well.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
///
/// # Returns
///
/// The links sharing the page's resolved origin, in document order.
/// Empty on any fetch failure; the caller cannot distinguish a failed
/// fetch from a page without links (failures are logged instead).
pub async fn fetch_links(client: &Client, url: &str) -> Vec<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", url, e);
            return Vec::new();
        }
    };

    // Origin comes from the post-redirect URL, captured before the body
    // read consumes the response
    let origin = match Origin::of(response.url()) {
        Some(origin) => origin,
        None => {
            tracing::warn!("Resolved URL for {} has no host", url);
            return Vec::new();
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read body of {}: {}", url, e);
            return Vec::new();
        }
    };

    let links: Vec<String> = extract_links(&body, &origin)
        .into_iter()
        .filter(|link| origin.contains(link))
        .collect();

    tracing::debug!("Fetched {} ({} same-origin links)", url, links.len());

    links
}
