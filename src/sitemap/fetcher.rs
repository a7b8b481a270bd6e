//! HTTP fetcher for sitemap documents
//!
//! This module handles every request made during a traversal:
//! - Building the HTTP client from the client configuration
//! - GET requests for sitemap documents
//! - Gunzipping bodies whose URL path ends in `.gz`
//! - Mapping transport and status failures to `SitemapError`

use crate::config::ClientConfig;
use crate::url::{is_gzip_url, parse_sitemap_url};
use crate::SitemapError;
use flate2::read::GzDecoder;
use reqwest::Client;
use std::io::{self, Read};
use std::time::Duration;

/// Builds an HTTP client from the client configuration
///
/// Timeouts are only applied when configured; otherwise the transport
/// defaults are kept.
///
/// # Example
///
/// ```
/// use sitemap2csv::config::ClientConfig;
/// use sitemap2csv::sitemap::build_http_client;
///
/// let client = build_http_client(&ClientConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.connect_timeout_seconds {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Retrieves raw sitemap bytes over HTTP
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with a client built from the configuration
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the document at `url`
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The response body, gunzipped when the URL path ends in `.gz`
    /// * `Err(SitemapError::InvalidUrl)` - The URL is not an absolute HTTP(S) URL
    /// * `Err(SitemapError::Network)` - The request failed or returned a non-2xx status
    /// * `Err(SitemapError::Decompress)` - A `.gz` body is not valid gzip
    pub async fn fetch(&self, url: &str) -> crate::Result<Vec<u8>> {
        let parsed = parse_sitemap_url(url)?;
        let gzip = is_gzip_url(&parsed);
        let network = |source: reqwest::Error| SitemapError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        let body = response.bytes().await.map_err(network)?;

        tracing::debug!(url, bytes = body.len(), gzip, "Fetched sitemap document");

        if !gzip {
            return Ok(body.to_vec());
        }

        gunzip(&body).map_err(|source| SitemapError::Decompress {
            url: url.to_string(),
            source,
        })
    }
}

/// Decompresses a complete gzip stream held in memory
fn gunzip(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut buffer = Vec::new();
    decoder.read_to_end(&mut buffer)?;
    Ok(buffer)
}
