//! Sitemapper main entry point
//!
//! Command-line interface for the same-origin sitemap builder: crawl a
//! site breadth-first from a seed URL and print an XML sitemap of every
//! reachable page to stdout.

use clap::Parser;
use sitemapper::crawler::crawl;
use sitemapper::output::write_sitemap;
use sitemapper::SitemapError;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Sitemapper: build an XML sitemap for a website
///
/// Starting from the seed URL, sitemapper follows same-origin links up to
/// the given depth and prints a sitemaps.org document to stdout. Dead
/// links and unreachable pages are skipped over, never fatal.
#[derive(Parser, Debug)]
#[command(name = "sitemapper")]
#[command(version)]
#[command(about = "Build an XML sitemap for a website", long_about = None)]
struct Cli {
    /// The seed URL to build the sitemap for
    #[arg(short, long, default_value = "https://example.com")]
    url: String,

    /// Maximum number of links deep to traverse
    #[arg(short, long, default_value_t = 3)]
    depth: usize,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let seed = validate_seed(&cli.url)?;
    tracing::info!("Crawling {} to depth {}", seed, cli.depth);

    let pages = crawl(&seed, cli.depth).await?;
    tracing::info!("Crawl complete: {} pages visited", pages.len());

    // The sitemap owns stdout; a failure here is the one fatal fault path
    let stdout = std::io::stdout();
    write_sitemap(&pages, stdout.lock())?;

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout stays clean for the sitemap document.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemapper=info,warn"),
            1 => EnvFilter::new("sitemapper=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Validates that the seed is an absolute URL with a scheme and host
fn validate_seed(seed: &str) -> Result<String, SitemapError> {
    let parsed = Url::parse(seed).map_err(|e| SitemapError::InvalidSeed {
        url: seed.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.host_str().is_none() {
        return Err(SitemapError::InvalidSeed {
            url: seed.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(seed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_seed_accepts_absolute_url() {
        assert!(validate_seed("https://example.com/").is_ok());
        assert!(validate_seed("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_validate_seed_keeps_string_verbatim() {
        // The seed enters the visited set exactly as given
        let seed = validate_seed("https://example.com").unwrap();
        assert_eq!(seed, "https://example.com");
    }

    #[test]
    fn test_validate_seed_rejects_relative() {
        assert!(validate_seed("/just/a/path").is_err());
        assert!(validate_seed("example.com").is_err());
    }

    #[test]
    fn test_validate_seed_rejects_hostless() {
        assert!(validate_seed("data:text/plain,hi").is_err());
    }
}
