//! URL handling for sitemap locations
//!
//! Sitemap locations are taken verbatim from `<loc>` elements, so they are
//! checked here before a request is built for them.

use crate::{Result, SitemapError};
use url::Url;

/// Characters stripped from both ends of a `<loc>` value
const LOC_TRIM_CHARS: &[char] = &[' ', '\n'];

/// Trims leading and trailing spaces and newlines from a location string
///
/// Only spaces and line feeds are removed; tabs and carriage returns are
/// kept so that a location round-trips exactly as the sitemap wrote it.
///
/// # Examples
///
/// ```
/// use sitemap2csv::url::trim_loc;
///
/// assert_eq!(trim_loc("\n  https://example.com/  \n"), "https://example.com/");
/// ```
pub fn trim_loc(loc: &str) -> &str {
    loc.trim_matches(LOC_TRIM_CHARS)
}

/// Parses a sitemap location into an absolute HTTP(S) URL
///
/// # Arguments
///
/// * `url_str` - The location to parse
///
/// # Returns
///
/// * `Ok(Url)` - Parsed absolute URL
/// * `Err(SitemapError::InvalidUrl)` - The location is relative, malformed,
///   or uses a scheme other than `http`/`https`
pub fn parse_sitemap_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|e| SitemapError::InvalidUrl {
        url: url_str.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SitemapError::InvalidUrl {
            url: url_str.to_string(),
            message: format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                url.scheme()
            ),
        });
    }

    Ok(url)
}

/// Returns true if the URL path signals a gzip-compressed document
///
/// Only the path is consulted; query strings and fragments are ignored.
///
/// # Examples
///
/// ```
/// use sitemap2csv::url::is_gzip_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/sitemap.xml.gz?v=2").unwrap();
/// assert!(is_gzip_url(&url));
/// ```
pub fn is_gzip_url(url: &Url) -> bool {
    url.path().ends_with(".gz")
}
