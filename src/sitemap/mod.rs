//! Sitemap traversal module
//!
//! This module contains the core of the tool:
//! - Fetching sitemap documents, transparently gunzipping `.gz` locations
//! - Classifying and parsing sitemap index and urlset documents
//! - Walking an index tree depth-first and collecting page records

mod fetcher;
mod parser;
mod traversal;

pub use fetcher::{build_http_client, Fetcher};
pub use parser::{
    classify_document, parse_sitemap_index, parse_urlset, DocumentKind, SitemapRef, UrlEntry,
};
pub use traversal::traverse;

use std::collections::BTreeMap;

/// Leaf sitemap URL mapped to the number of `<url>` entries it contained
pub type ProcessedMap = BTreeMap<String, usize>;

/// One page URL discovered anywhere in the sitemap tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Page location, trimmed of surrounding spaces and newlines
    pub loc: String,

    /// Last-modified value exactly as written, empty when absent
    pub lastmod: String,
}

impl Record {
    /// Creates a new record
    pub fn new(loc: impl Into<String>, lastmod: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: lastmod.into(),
        }
    }

    /// The `loc,lastmod` header row
    pub fn header() -> Self {
        Self::new("loc", "lastmod")
    }

    /// Returns the record as a two-column row
    pub fn as_row(&self) -> [&str; 2] {
        [&self.loc, &self.lastmod]
    }
}

/// Aggregate result of walking a sitemap tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRecords {
    /// Header row followed by every page record in traversal order
    pub records: Vec<Record>,

    /// Entry counts per leaf sitemap fetched
    pub processed: ProcessedMap,
}

impl SitemapRecords {
    /// Creates a result holding only the header row
    pub fn new() -> Self {
        Self {
            records: vec![Record::header()],
            processed: ProcessedMap::new(),
        }
    }

    /// Page records without the header row
    pub fn pages(&self) -> &[Record] {
        self.records.get(1..).unwrap_or_default()
    }

    /// Number of page records collected
    pub fn page_count(&self) -> usize {
        self.pages().len()
    }
}

impl Default for SitemapRecords {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches a sitemap tree and returns all of its page records
///
/// The returned records start with the `loc,lastmod` header. Any failure
/// anywhere in the tree aborts the walk and no partial result is returned.
///
/// # Arguments
///
/// * `fetcher` - The fetcher used for every document in the tree
/// * `root_url` - URL of the root sitemap or sitemap index
///
/// # Example
///
/// ```no_run
/// use sitemap2csv::config::ClientConfig;
/// use sitemap2csv::sitemap::{get_records, Fetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(&ClientConfig::default())?;
/// let result = get_records(&fetcher, "https://example.com/sitemap.xml").await?;
/// for (url, count) in &result.processed {
///     println!("Processed {} URLs from {}", count, url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn get_records(
    fetcher: &Fetcher,
    root_url: &str,
) -> crate::Result<SitemapRecords> {
    let mut result = SitemapRecords::new();
    traverse(
        fetcher,
        root_url,
        &mut result.records,
        &mut result.processed,
    )
    .await?;
    Ok(result)
}
