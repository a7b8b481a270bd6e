//! Configuration module for sitemap2csv
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key is optional; a missing file section falls
//! back to `Config::default()`.
//!
//! # Example
//!
//! ```no_run
//! use sitemap2csv::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap2csv.toml")).unwrap();
//! println!("User agent: {}", config.client.user_agent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, OutputConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
