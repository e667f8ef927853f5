//! Behaviour of the inspections on small hand-built tables.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use tabscope_inspect::{
    DEFAULT_HEAD_ROWS, DEFAULT_TAIL_ROWS, InspectError, assess_quality, describe, first_rows,
    last_rows,
};
use tabscope_model::{CellValue, ColumnType, Table};

fn table(columns: Vec<Column>) -> Table {
    Table::new(DataFrame::new(columns).unwrap())
}

fn int_col(name: &str, values: &[Option<i64>]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn str_col(name: &str, values: &[&str]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn letters() -> Table {
    table(vec![
        int_col("A", &[Some(1), Some(2), Some(3), Some(4), Some(5)]),
        str_col("B", &["a", "b", "c", "d", "e"]),
    ])
}

#[test]
fn last_two_rows_keep_original_order() {
    let tail = last_rows(&letters(), 2).unwrap();

    assert_eq!(
        tail.rows(),
        vec![vec![text("4"), text("d")], vec![text("5"), text("e")]]
    );
    assert_eq!(tail.index_offset(), 3);
}

#[test]
fn first_rows_default_window() {
    let source = table(vec![int_col(
        "A",
        &[Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)],
    )]);
    let head = first_rows(&source, DEFAULT_HEAD_ROWS).unwrap();

    assert_eq!(head.height(), 5);
    assert_eq!(head.row(4), Some(vec![text("5")]));
    assert_eq!(head.index_offset(), 0);
}

#[test]
fn oversized_window_returns_whole_table() {
    let source = letters();
    assert_eq!(first_rows(&source, 50).unwrap().rows(), source.rows());
    assert_eq!(last_rows(&source, 50).unwrap().rows(), source.rows());
    assert_eq!(last_rows(&source, 50).unwrap().index_offset(), 0);
}

#[test]
fn zero_row_window_is_invalid() {
    let source = letters();
    assert!(matches!(
        first_rows(&source, 0),
        Err(InspectError::InvalidRowCount { n: 0 })
    ));
    assert!(matches!(
        last_rows(&source, 0),
        Err(InspectError::InvalidRowCount { n: 0 })
    ));
}

#[test]
fn window_of_rowless_table_keeps_columns() {
    let source = table(vec![int_col("A", &[]), str_col("B", &[])]);
    let tail = last_rows(&source, DEFAULT_TAIL_ROWS).unwrap();
    assert!(tail.is_empty());
    assert_eq!(tail.column_names(), vec!["A", "B"]);
}

#[test]
fn describe_counts_nulls_per_column() {
    let source = table(vec![
        int_col("col1", &[Some(1), None, Some(3)]),
        int_col("col2", &[None, Some(2), None]),
    ]);
    let description = describe(&source);

    assert_eq!(description.shape, (3, 2));
    assert_eq!(description.columns, vec!["col1", "col2"]);
    assert_eq!(description.null_count.get("col1"), Some(&1));
    assert_eq!(description.null_count.get("col2"), Some(&2));
    assert_eq!(description.total_nulls, 3);
    assert_eq!(description.dtypes.get("col1"), Some(&ColumnType::Integer));
}

#[test]
fn describe_preserves_declaration_order() {
    let source = table(vec![
        str_col("zeta", &["x"]),
        int_col("alpha", &[Some(1)]),
        str_col("mid", &["y"]),
    ]);
    let description = describe(&source);

    assert_eq!(description.columns, vec!["zeta", "alpha", "mid"]);
    let dtype_order: Vec<&str> = description.dtypes.iter().map(|(name, _)| name).collect();
    assert_eq!(dtype_order, vec!["zeta", "alpha", "mid"]);
    assert_eq!(description.dtypes.get("zeta"), Some(&ColumnType::Text));
}

#[test]
fn quality_detects_duplicate_rows() {
    let source = table(vec![
        int_col("col1", &[Some(1), Some(2), Some(1), Some(3)]),
        str_col("col2", &["a", "b", "a", "c"]),
    ]);
    let metrics = assess_quality(&source);

    assert!(metrics.has_duplicates);
    assert_eq!(metrics.duplicate_count, 1);
    assert_eq!(metrics.total_cells, 8);
    assert_eq!(metrics.completeness_percentage, 100.0);
}

#[test]
fn null_rows_are_duplicates_of_each_other() {
    let source = table(vec![
        int_col("col1", &[None, None, Some(1)]),
        int_col("col2", &[Some(2), Some(2), Some(2)]),
    ]);
    let metrics = assess_quality(&source);

    assert_eq!(metrics.duplicate_count, 1);
    assert_eq!(metrics.null_cells, 2);
    assert_eq!(metrics.completeness_percentage, 66.67);
}

#[test]
fn quality_of_empty_table_is_zero() {
    let metrics = assess_quality(&Table::empty());

    assert_eq!(metrics.total_rows, 0);
    assert_eq!(metrics.total_columns, 0);
    assert_eq!(metrics.total_cells, 0);
    assert_eq!(metrics.completeness_percentage, 0.0);
    assert!(!metrics.has_duplicates);
}

#[test]
fn inspections_are_idempotent() {
    let source = letters();
    assert_eq!(describe(&source), describe(&source));
    assert_eq!(assess_quality(&source), assess_quality(&source));
}
