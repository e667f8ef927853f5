use serde::Serialize;

/// Data-quality metrics derived from a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub total_rows: usize,
    pub total_columns: usize,
    /// `total_rows * total_columns`.
    pub total_cells: usize,
    pub null_cells: usize,
    /// Share of non-null cells, in percent, rounded to two decimals.
    /// Zero for a table without cells.
    pub completeness_percentage: f64,
    pub has_duplicates: bool,
    /// Rows that repeat an earlier row.
    pub duplicate_count: usize,
}
