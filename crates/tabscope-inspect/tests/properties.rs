//! Properties that hold for any table.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use tabscope_inspect::{assess_quality, describe, first_rows, last_rows};
use tabscope_model::Table;

type Row = (Option<i64>, Option<String>);

fn build(rows: &[Row]) -> Table {
    let ints: Vec<Option<i64>> = rows.iter().map(|(a, _)| *a).collect();
    let texts: Vec<Option<String>> = rows.iter().map(|(_, b)| b.clone()).collect();
    let columns = vec![
        Series::new("num".into(), ints).into_column(),
        Series::new("label".into(), texts).into_column(),
    ];
    Table::new(DataFrame::new(columns).unwrap())
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            prop::option::of(0i64..4),
            prop::option::of("[a-c]{1,2}"),
        ),
        0..24,
    )
}

proptest! {
    #[test]
    fn first_rows_is_a_prefix(rows in rows_strategy(), n in 1usize..32) {
        let table = build(&rows);
        let head = first_rows(&table, n).unwrap();
        let expected = n.min(table.height());
        prop_assert_eq!(head.height(), expected);
        prop_assert_eq!(head.rows(), table.rows()[..expected].to_vec());
    }

    #[test]
    fn last_rows_is_a_suffix(rows in rows_strategy(), n in 1usize..32) {
        let table = build(&rows);
        let tail = last_rows(&table, n).unwrap();
        let expected = n.min(table.height());
        prop_assert_eq!(tail.height(), expected);
        prop_assert_eq!(tail.rows(), table.rows()[table.height() - expected..].to_vec());
        prop_assert_eq!(tail.index_offset(), table.height() - expected);
    }

    #[test]
    fn null_counts_sum_to_total(rows in rows_strategy()) {
        let description = describe(&build(&rows));
        let summed: usize = description.null_count.values().sum();
        prop_assert_eq!(summed, description.total_nulls);
    }

    #[test]
    fn full_completeness_means_no_nulls(rows in rows_strategy()) {
        let metrics = assess_quality(&build(&rows));
        let complete = metrics.null_cells == 0 && metrics.total_cells > 0;
        prop_assert_eq!(metrics.completeness_percentage == 100.0, complete);
        if metrics.total_cells == 0 {
            prop_assert_eq!(metrics.completeness_percentage, 0.0);
        }
    }

    #[test]
    fn duplicates_count_repeated_rows(rows in rows_strategy()) {
        let metrics = assess_quality(&build(&rows));
        let mut distinct = rows.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(metrics.duplicate_count, rows.len() - distinct.len());
        prop_assert_eq!(metrics.has_duplicates, metrics.duplicate_count > 0);
    }
}
