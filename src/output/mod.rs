//! Output module for sitemap records
//!
//! This module handles:
//! - Writing the collected records as CSV
//! - Reporting how many URLs each leaf sitemap contributed

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{write_csv_file, CsvOutput};
pub use stats::{print_processed_report, processed_report, ProcessedSummary};
pub use traits::OutputHandler;
