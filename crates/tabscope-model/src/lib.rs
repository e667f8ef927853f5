//! Table model and report types shared by the tabscope crates.
//!
//! A [`Table`] wraps a Polars `DataFrame` loaded from a CSV file. The
//! [`TableDescription`] and [`QualityMetrics`] types are the value objects
//! produced by inspecting a table; they are never persisted.

pub mod description;
pub mod quality;
pub mod table;
pub mod value;

pub use description::{ColumnMap, ColumnType, ColumnTypes, NullCounts, TableDescription};
pub use quality::QualityMetrics;
pub use table::{CellValue, Table};
