use url::Url;

/// The origin of a URL: its `scheme://host` prefix, with the port kept when
/// the URL carries an explicit non-default one.
///
/// An origin identifies the site boundary the crawl is scoped to. Two URLs
/// belong to the same site exactly when one's string form starts with the
/// other's origin prefix; no canonicalization happens beyond what the URL
/// parser and HTTP redirect resolution already performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Derives the origin of a parsed URL
    ///
    /// Returns `None` when the URL has no host (e.g. `data:` or `file:`
    /// URLs), in which case there is no site boundary to scope to.
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use sitemapper::Origin;
    ///
    /// let url = Url::parse("https://example.com/a/b?q=1#frag").unwrap();
    /// let origin = Origin::of(&url).unwrap();
    /// assert_eq!(origin.as_str(), "https://example.com");
    /// ```
    pub fn of(url: &Url) -> Option<Origin> {
        let host = url.host_str()?;
        let prefix = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Some(Origin(prefix))
    }

    /// Returns the origin as a `scheme://host[:port]` prefix string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a root-relative path against this origin
    ///
    /// This is plain prefix concatenation: `/about` on
    /// `https://example.com` becomes `https://example.com/about`.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Returns true if the given absolute URL string lies within this origin
    pub fn contains(&self, link: &str) -> bool {
        link.starts_with(self.0.as_str())
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
