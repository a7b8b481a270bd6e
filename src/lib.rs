//! sitemap2csv: flatten a sitemap tree into tabular records
//!
//! This crate fetches a sitemap or sitemap index, follows every nested index
//! reference depth-first, and collects each page URL with its last-modified
//! date into a single record set ready for CSV output.

pub mod config;
pub mod output;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for sitemap traversal
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("HTTP error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Invalid sitemap URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to decompress gzip body from {url}: {source}")]
    Decompress { url: String, source: std::io::Error },

    #[error("Malformed sitemap XML at {url}: {message}")]
    MalformedXml { url: String, message: String },

    #[error("Invalid sitemap xml at {url}: missing <sitemapindex> or <urlset>")]
    UnknownFormat { url: String },

    #[error("Invalid sitemapindex xml at {url}: no <sitemap> entries found")]
    EmptyIndex { url: String },

    #[error("Invalid urlset xml at {url}: no <url> entries found")]
    EmptyUrlSet { url: String },

    #[error("Sitemap index cycle detected at {url}: it is one of its own ancestors")]
    Cycle { url: String },
}

impl SitemapError {
    /// Returns the URL of the document that caused the failure
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::InvalidUrl { url, .. }
            | Self::Decompress { url, .. }
            | Self::MalformedXml { url, .. }
            | Self::UnknownFormat { url }
            | Self::EmptyIndex { url }
            | Self::EmptyUrlSet { url }
            | Self::Cycle { url } => url,
        }
    }

    /// Returns true if the request could not be issued or completed
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::InvalidUrl { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Output-specific errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for sitemap operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::Config;
pub use sitemap::{get_records, traverse, Fetcher, ProcessedMap, Record, SitemapRecords};
