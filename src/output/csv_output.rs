//! CSV output handler

use crate::output::OutputHandler;
use crate::sitemap::SitemapRecords;
use crate::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes sitemap records as two-column CSV
pub struct CsvOutput<W: Write> {
    writer: csv::Writer<W>,
    include_header: bool,
}

impl<W: Write> CsvOutput<W> {
    /// Creates a CSV handler over any writer
    ///
    /// # Arguments
    ///
    /// * `writer` - Destination for the CSV text
    /// * `include_header` - Whether the `loc,lastmod` row is written
    pub fn new(writer: W, include_header: bool) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            include_header,
        }
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputHandler for CsvOutput<W> {
    fn write_records(&mut self, result: &SitemapRecords) -> OutputResult<()> {
        let rows = if self.include_header {
            &result.records[..]
        } else {
            result.pages()
        };

        for record in rows {
            self.writer.write_record(record.as_row())?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Creates `path` and writes the records to it as CSV
///
/// # Example
///
/// ```no_run
/// use sitemap2csv::output::write_csv_file;
/// use sitemap2csv::sitemap::SitemapRecords;
/// use std::path::Path;
///
/// let result = SitemapRecords::new();
/// write_csv_file(Path::new("sitemap.csv"), &result, true).unwrap();
/// ```
pub fn write_csv_file(
    path: &Path,
    result: &SitemapRecords,
    include_header: bool,
) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut output = CsvOutput::new(file, include_header);
    output.write_records(result)?;
    output.finalize()?;

    tracing::debug!(
        path = %path.display(),
        rows = result.page_count(),
        "Wrote CSV output"
    );

    Ok(())
}
