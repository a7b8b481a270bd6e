//! Output handler trait
//!
//! This module defines the interface between a finished traversal and the
//! sinks that persist its records.

use crate::sitemap::SitemapRecords;
use crate::OutputResult;

/// Trait for output handlers
///
/// Handlers receive a complete traversal result; a failed traversal never
/// reaches an output handler.
pub trait OutputHandler {
    /// Writes every record of a traversal result
    ///
    /// # Arguments
    ///
    /// * `result` - The complete traversal result, header row first
    fn write_records(&mut self, result: &SitemapRecords) -> OutputResult<()>;

    /// Finalizes the output, flushing any buffered data
    fn finalize(&mut self) -> OutputResult<()>;
}
