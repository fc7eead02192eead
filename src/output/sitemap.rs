//! XML sitemap serialization
//!
//! Renders the visited-URL sequence as a sitemaps.org document: an XML
//! declaration, a `<urlset>` root carrying the namespace attribute, and
//! one `<url><loc>...</loc></url>` entry per page. Pretty-printed with
//! tab indentation and a trailing newline.
//!
//! This is the only fatal fault path in the crate: a write or encoding
//! failure propagates and aborts the run.

use crate::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;

/// Namespace attribute value on the sitemap root element
pub const SITEMAP_XMLNS: &str = "https://www.sitemaps.org/schemas/sitemap/0.9";

/// Writes the sitemap document for the given pages to an output stream
///
/// Pages are emitted in the order given; the crawl imposes no particular
/// order and the sitemap format does not require one. URL text is
/// XML-escaped by the writer, so entries like `?a=1&b=2` stay well-formed.
///
/// # Arguments
///
/// * `pages` - The visited URLs, one `<url>` entry each
/// * `out` - The stream the document is written to
///
/// # Errors
///
/// Returns an error when the document cannot be encoded or written; this
/// is expected to terminate the process.
pub fn write_sitemap<W: io::Write>(pages: &[String], mut out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(&mut out, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("urlset");
    root.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer.write_event(Event::Start(root))?;

    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(page)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    out.write_all(b"\n")?;
    Ok(())
}
