//! Pure inspections over a [`Table`](tabscope_model::Table).
//!
//! Every function here takes the table by reference and computes its
//! result fresh; nothing is cached between calls.

mod describe;
mod error;
mod quality;
mod window;

pub use describe::describe;
pub use error::{InspectError, Result};
pub use quality::{assess_quality, completeness_percentage, duplicate_count};
pub use window::{DEFAULT_HEAD_ROWS, DEFAULT_TAIL_ROWS, first_rows, last_rows};
