use tabscope_model::{ColumnType, ColumnTypes, NullCounts, Table, TableDescription};
use tracing::trace;

/// Shape, column names, declared types and null counts of `table`.
pub fn describe(table: &Table) -> TableDescription {
    let mut dtypes = Vec::with_capacity(table.width());
    let mut null_count = Vec::with_capacity(table.width());
    for column in table.columns() {
        let name = column.name().to_string();
        let dtype = ColumnType::from_dtype(column.dtype());
        let nulls = column.null_count();
        trace!(column = %name, dtype = %dtype, nulls, "column summary");
        dtypes.push((name.clone(), dtype));
        null_count.push((name, nulls));
    }
    let total_nulls = null_count.iter().map(|(_, nulls)| nulls).sum();

    TableDescription {
        shape: table.shape(),
        columns: table.column_names(),
        dtypes: dtypes.into_iter().collect::<ColumnTypes>(),
        null_count: null_count.into_iter().collect::<NullCounts>(),
        total_nulls,
    }
}
