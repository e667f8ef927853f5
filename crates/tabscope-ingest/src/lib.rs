//! CSV ingestion for tabscope.
//!
//! Reads a comma-separated file whose first line is the header into a
//! [`Table`](tabscope_model::Table). Column types are whatever the CSV
//! parser infers; empty fields and NA markers such as `NA` or `null`
//! become nulls.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabscope_ingest::load;
//!
//! let table = load(Path::new("data.csv"))?;
//! println!("{} rows", table.height());
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{MAX_COLUMNS_BEFORE_WARNING, NULL_TOKENS, load};
