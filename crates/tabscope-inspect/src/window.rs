use tabscope_model::Table;
use tracing::debug;

use crate::error::{InspectError, Result};

/// Rows shown by [`first_rows`] when the caller has no preference.
pub const DEFAULT_HEAD_ROWS: usize = 5;
/// Rows shown by [`last_rows`] when the caller has no preference.
pub const DEFAULT_TAIL_ROWS: usize = 2;

fn check_row_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(InspectError::InvalidRowCount { n });
    }
    Ok(())
}

/// Returns rows `[0, n)` in order, or the whole table when it has fewer
/// than `n` rows.
///
/// # Errors
///
/// Returns [`InspectError::InvalidRowCount`] when `n` is zero.
pub fn first_rows(table: &Table, n: usize) -> Result<Table> {
    check_row_count(n)?;
    debug!(n, rows = table.height(), "first rows");
    Ok(table.slice(0, n))
}

/// Returns the final `n` rows in their original order, or the whole table
/// when it has fewer than `n` rows.
///
/// # Errors
///
/// Returns [`InspectError::InvalidRowCount`] when `n` is zero.
pub fn last_rows(table: &Table, n: usize) -> Result<Table> {
    check_row_count(n)?;
    debug!(n, rows = table.height(), "last rows");
    let start = table.height().saturating_sub(n);
    Ok(table.slice(start, n))
}
