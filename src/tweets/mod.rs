//! Tweet feature extraction
//!
//! Loads newline-delimited tweet JSON, pulls a fixed set of fields out of
//! each record (with fallbacks for optional keys), annotates sentiment and
//! assembles everything into a flat table that can be written as CSV.

pub mod extractor;
pub mod loader;
pub mod table;
pub mod types;
pub mod writer;

pub use extractor::{clean_text, TweetExtractor};
pub use loader::{read_json, read_json_from, read_json_with};
pub use table::TweetTable;
pub use types::{Cell, Column, ColumnSet, ExtractConfig, LoadOptions, DEFAULT_OUTPUT_PATH};
pub use writer::CsvTableWriter;
