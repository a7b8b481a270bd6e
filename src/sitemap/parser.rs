//! Sitemap XML parser
//!
//! Documents are classified by a marker sniff before any structural parse:
//! - `<sitemapindex` marks an index of further sitemaps
//! - `<urlset` marks a leaf listing page URLs
//!
//! Parsing walks the XML events keyed on element local names, so the
//! standard sitemap namespace declaration and extension elements are
//! ignored. Text is never trimmed here: `<loc>` and `<lastmod>` come back
//! exactly as written.

use crate::url::trim_loc;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const SITEMAP_INDEX_MARKER: &[u8] = b"<sitemapindex";
const URLSET_MARKER: &[u8] = b"<urlset";

/// Kind of sitemap document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `<sitemapindex>` referencing other sitemaps
    Index,
    /// `<urlset>` listing page URLs
    UrlSet,
}

/// A `<sitemap>` reference inside a sitemap index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRef {
    pub loc: String,
    pub lastmod: Option<String>,
}

/// A `<url>` entry inside a urlset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

/// Child element of an entry whose text is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    Lastmod,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"loc" => Some(Self::Loc),
            b"lastmod" => Some(Self::Lastmod),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct RawEntry {
    loc: Option<String>,
    lastmod: Option<String>,
}

impl RawEntry {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Loc => &mut self.loc,
            Field::Lastmod => &mut self.lastmod,
        }
    }
}

/// Element nesting levels, counting the root as 1
const ENTRY_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// Classifies raw document bytes by marker
///
/// The index marker wins when both are present. Returns `None` when neither
/// marker appears.
///
/// # Example
///
/// ```
/// use sitemap2csv::sitemap::{classify_document, DocumentKind};
///
/// assert_eq!(classify_document(b"<urlset></urlset>"), Some(DocumentKind::UrlSet));
/// assert_eq!(classify_document(b"notxml"), None);
/// ```
pub fn classify_document(data: &[u8]) -> Option<DocumentKind> {
    if contains(data, SITEMAP_INDEX_MARKER) {
        Some(DocumentKind::Index)
    } else if contains(data, URLSET_MARKER) {
        Some(DocumentKind::UrlSet)
    } else {
        None
    }
}

/// Parses a sitemap index into its references, in document order
///
/// An empty list is not an error here; callers decide what an index with
/// no `<sitemap>` children means.
///
/// # Returns
///
/// * `Ok(Vec<SitemapRef>)` - References in document order
/// * `Err(String)` - The document is not well-formed or not shaped as
///   `sitemapindex` → `sitemap` → `loc`/`lastmod`
pub fn parse_sitemap_index(data: &[u8]) -> Result<Vec<SitemapRef>, String> {
    let entries = parse_entries(data, "sitemapindex", "sitemap")?;
    Ok(entries
        .into_iter()
        .map(|(loc, lastmod)| SitemapRef { loc, lastmod })
        .collect())
}

/// Parses a urlset into its page entries, in document order
///
/// # Returns
///
/// * `Ok(Vec<UrlEntry>)` - Entries in document order
/// * `Err(String)` - The document is not well-formed or not shaped as
///   `urlset` → `url` → `loc`/`lastmod`
pub fn parse_urlset(data: &[u8]) -> Result<Vec<UrlEntry>, String> {
    let entries = parse_entries(data, "urlset", "url")?;
    Ok(entries
        .into_iter()
        .map(|(loc, lastmod)| UrlEntry { loc, lastmod })
        .collect())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Collects `(loc, lastmod)` pairs of every `entry` child of the `root` element
///
/// A repeated `<loc>` or `<lastmod>` inside one entry replaces the earlier
/// value. Every entry must end up with a non-blank `<loc>`.
fn parse_entries(
    data: &[u8],
    root: &str,
    entry: &str,
) -> Result<Vec<(String, Option<String>)>, String> {
    let mut reader = Reader::from_reader(data);
    reader.trim_text(false).check_end_names(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current: Option<RawEntry> = None;
    let mut field: Option<Field> = None;
    let mut raw_entries = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("error at position {}: {}", reader.buffer_position(), e))?;

        match event {
            Event::Start(element) => {
                depth += 1;
                match depth {
                    1 => open_root(&element, root, &mut seen_root)?,
                    ENTRY_DEPTH if element.local_name().as_ref() == entry.as_bytes() => {
                        current = Some(RawEntry::default());
                    }
                    FIELD_DEPTH => {
                        if let Some(raw) = current.as_mut() {
                            field = Field::from_name(element.local_name().as_ref());
                            if let Some(f) = field {
                                *raw.slot(f) = Some(String::new());
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(element) => match depth + 1 {
                1 => open_root(&element, root, &mut seen_root)?,
                ENTRY_DEPTH if element.local_name().as_ref() == entry.as_bytes() => {
                    raw_entries.push(RawEntry::default());
                }
                FIELD_DEPTH => {
                    if let (Some(raw), Some(f)) = (
                        current.as_mut(),
                        Field::from_name(element.local_name().as_ref()),
                    ) {
                        *raw.slot(f) = Some(String::new());
                    }
                }
                _ => {}
            },
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| "unexpected closing tag".to_string())?;
                match depth {
                    ENTRY_DEPTH => field = None,
                    1 => {
                        if let Some(raw) = current.take() {
                            raw_entries.push(raw);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(text) if depth == FIELD_DEPTH => {
                if let (Some(raw), Some(f)) = (current.as_mut(), field) {
                    let unescaped = text.unescape().map_err(|e| e.to_string())?;
                    raw.slot(f).get_or_insert_with(String::new).push_str(&unescaped);
                }
            }
            Event::CData(cdata) if depth == FIELD_DEPTH => {
                if let (Some(raw), Some(f)) = (current.as_mut(), field) {
                    let content = std::str::from_utf8(&cdata).map_err(|e| e.to_string())?;
                    raw.slot(f).get_or_insert_with(String::new).push_str(content);
                }
            }
            Event::Eof => {
                if !seen_root {
                    return Err("document has no root element".to_string());
                }
                if depth > 0 {
                    return Err(format!("unexpected end of document inside <{}>", root));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    raw_entries
        .into_iter()
        .enumerate()
        .map(|(index, raw)| match raw.loc {
            Some(loc) if !trim_loc(&loc).is_empty() => Ok((loc, raw.lastmod)),
            Some(_) => Err(format!("<{}> entry {} has an empty <loc>", entry, index + 1)),
            None => Err(format!("<{}> entry {} has no <loc>", entry, index + 1)),
        })
        .collect()
}

/// Checks the root element's local name; a second root element is rejected
fn open_root(element: &BytesStart<'_>, expected: &str, seen_root: &mut bool) -> Result<(), String> {
    let name = element.local_name();
    if *seen_root {
        return Err(format!(
            "unexpected element <{}> after the root element",
            String::from_utf8_lossy(name.as_ref())
        ));
    }
    if name.as_ref() != expected.as_bytes() {
        return Err(format!(
            "expected root element <{}> but found <{}>",
            expected,
            String::from_utf8_lossy(name.as_ref())
        ));
    }
    *seen_root = true;
    Ok(())
}
