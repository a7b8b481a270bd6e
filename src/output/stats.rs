//! Per-sitemap processing report
//!
//! Summarizes how many page URLs each leaf sitemap contributed to a
//! traversal.

use crate::sitemap::ProcessedMap;

/// Totals across all leaf sitemaps of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedSummary {
    /// Number of leaf sitemaps fetched
    pub sitemaps: usize,

    /// Number of page URLs across those sitemaps
    pub urls: usize,
}

impl ProcessedSummary {
    /// Computes totals from a processed map
    pub fn from_processed(processed: &ProcessedMap) -> Self {
        Self {
            sitemaps: processed.len(),
            urls: processed.values().sum(),
        }
    }
}

/// Renders one "Processed N URLs from URL" line per leaf sitemap
///
/// Lines follow the map's key order.
pub fn processed_report(processed: &ProcessedMap) -> Vec<String> {
    processed
        .iter()
        .map(|(url, count)| format!("Processed {} URLs from {}", count, url))
        .collect()
}

/// Prints the processed report to stdout
pub fn print_processed_report(processed: &ProcessedMap) {
    for line in processed_report(processed) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcessedMap {
        let mut processed = ProcessedMap::new();
        processed.insert("https://example.com/sitemap-b.xml".to_string(), 5);
        processed.insert("https://example.com/sitemap-a.xml".to_string(), 12);
        processed
    }

    #[test]
    fn test_processed_report_lines_are_sorted() {
        assert_eq!(
            processed_report(&sample()),
            vec![
                "Processed 12 URLs from https://example.com/sitemap-a.xml".to_string(),
                "Processed 5 URLs from https://example.com/sitemap-b.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_processed_report_empty() {
        assert!(processed_report(&ProcessedMap::new()).is_empty());
    }

    #[test]
    fn test_processed_summary() {
        let summary = ProcessedSummary::from_processed(&sample());
        assert_eq!(summary.sitemaps, 2);
        assert_eq!(summary.urls, 17);
    }
}
