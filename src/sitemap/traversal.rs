//! Depth-first walk over a sitemap index tree
//!
//! The walk keeps an explicit stack of pending sitemap URLs instead of
//! recursing, so deep index trees do not grow the call stack. Children of an
//! index are pushed in reverse so they are visited left to right.

use crate::sitemap::parser::{classify_document, parse_sitemap_index, parse_urlset, DocumentKind};
use crate::sitemap::{Fetcher, ProcessedMap, Record};
use crate::url::trim_loc;
use crate::{Result, SitemapError};

/// A sitemap waiting to be fetched
#[derive(Debug)]
struct PendingSitemap {
    url: String,
    /// Number of index documents between the root and this sitemap
    depth: usize,
}

/// Walks the sitemap tree rooted at `url`, appending every page record
///
/// Records are appended in depth-first, left-to-right order. Each leaf
/// urlset fetched gets an entry in `processed` keyed by its own URL.
///
/// The first failure anywhere in the tree aborts the walk. Records appended
/// before the failure stay in `records`; use [`get_records`] for an
/// all-or-nothing result.
///
/// # Errors
///
/// * Fetch errors from [`Fetcher::fetch`], unchanged
/// * `UnknownFormat` - neither `<sitemapindex` nor `<urlset` appears
/// * `MalformedXml` - the document does not parse into the expected shape
/// * `EmptyIndex` / `EmptyUrlSet` - a well-formed document with no entries
/// * `Cycle` - an index references one of its own ancestors
///
/// [`get_records`]: crate::sitemap::get_records
pub async fn traverse(
    fetcher: &Fetcher,
    url: &str,
    records: &mut Vec<Record>,
    processed: &mut ProcessedMap,
) -> Result<()> {
    let mut pending = vec![PendingSitemap {
        url: url.to_string(),
        depth: 0,
    }];
    // Index URLs on the path from the root to the sitemap being processed
    let mut ancestors: Vec<String> = Vec::new();

    while let Some(PendingSitemap { url, depth }) = pending.pop() {
        ancestors.truncate(depth);
        if ancestors.contains(&url) {
            return Err(SitemapError::Cycle { url });
        }

        let data = fetcher.fetch(&url).await?;

        match classify_document(&data) {
            Some(DocumentKind::Index) => {
                let refs = parse_sitemap_index(&data).map_err(|message| {
                    SitemapError::MalformedXml {
                        url: url.clone(),
                        message,
                    }
                })?;
                if refs.is_empty() {
                    return Err(SitemapError::EmptyIndex { url });
                }

                tracing::debug!(url = %url, sitemaps = refs.len(), "Expanding sitemap index");

                for entry in refs.iter().rev() {
                    let loc = trim_loc(&entry.loc);
                    tracing::trace!(parent = %url, loc, "Queued nested sitemap");
                    pending.push(PendingSitemap {
                        url: loc.to_string(),
                        depth: depth + 1,
                    });
                }
                ancestors.push(url);
            }
            Some(DocumentKind::UrlSet) => {
                let entries = parse_urlset(&data).map_err(|message| SitemapError::MalformedXml {
                    url: url.clone(),
                    message,
                })?;
                if entries.is_empty() {
                    return Err(SitemapError::EmptyUrlSet { url });
                }

                tracing::debug!(url = %url, urls = entries.len(), "Collected urlset entries");

                let count = entries.len();
                records.extend(entries.into_iter().map(|entry| {
                    Record::new(trim_loc(&entry.loc), entry.lastmod.unwrap_or_default())
                }));
                processed.insert(url, count);
            }
            None => return Err(SitemapError::UnknownFormat { url }),
        }
    }

    Ok(())
}
