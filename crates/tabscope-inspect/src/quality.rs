use std::collections::BTreeSet;

use tabscope_model::{QualityMetrics, Table};
use tracing::debug;

/// Percentage of non-null cells, rounded to two decimals with halves to even.
///
/// Zero when there are no cells. Never rounds up to 100 while a null
/// remains, so 100 always means a complete table.
pub fn completeness_percentage(total_cells: usize, null_cells: usize) -> f64 {
    if total_cells == 0 {
        return 0.0;
    }
    let filled = total_cells.saturating_sub(null_cells) as f64;
    let rounded = (filled / total_cells as f64 * 10_000.0).round_ties_even() / 100.0;
    if null_cells > 0 && rounded >= 100.0 {
        99.99
    } else {
        rounded
    }
}

/// Rows that repeat an earlier row. Nulls compare equal to nulls.
pub fn duplicate_count(table: &Table) -> usize {
    let mut seen = BTreeSet::new();
    let mut duplicates = 0usize;
    for row in table.rows() {
        if !seen.insert(row) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Size, completeness and duplicate metrics of `table`.
pub fn assess_quality(table: &Table) -> QualityMetrics {
    let (total_rows, total_columns) = table.shape();
    let total_cells = total_rows * total_columns;
    let null_cells: usize = table.columns().iter().map(|c| c.null_count()).sum();
    let duplicates = duplicate_count(table);
    debug!(total_cells, null_cells, duplicates, "assessed quality");

    QualityMetrics {
        total_rows,
        total_columns,
        total_cells,
        null_cells,
        completeness_percentage: completeness_percentage(total_cells, null_cells),
        has_duplicates: duplicates > 0,
        duplicate_count: duplicates,
    }
}
