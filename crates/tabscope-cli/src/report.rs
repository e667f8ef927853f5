use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table as Grid};

use tabscope_model::{CellValue, ColumnType, QualityMetrics, Table, TableDescription};

use crate::commands::Inspection;

/// Prints the text report: last rows, full table, first rows, the column
/// summary and the quality metrics.
pub fn print_report(inspection: &Inspection) {
    println!("{}", last_rows_heading(inspection.tail_rows));
    println!("{}", render_table(&inspection.tail));
    println!();
    println!("Full table:");
    println!("{}", render_table(&inspection.table));
    println!();
    println!("First rows:");
    println!("{}", render_table(&inspection.head));
    println!();
    println!("Table description:");
    for line in description_lines(&inspection.description) {
        println!("{line}");
    }
    println!();
    println!("Data quality:");
    for line in quality_lines(&inspection.quality) {
        println!("{line}");
    }
}

pub fn last_rows_heading(tail_rows: usize) -> String {
    format!("Last {tail_rows} rows:")
}

/// Renders `table` with a leading column of original row positions.
pub fn render_table(table: &Table) -> Grid {
    let mut grid = Grid::new();
    let mut header = vec![header_cell("")];
    header.extend(table.column_names().iter().map(|name| header_cell(name)));
    grid.set_header(header);
    apply_table_style(&mut grid);

    for (idx, column) in table.columns().iter().enumerate() {
        if matches!(
            ColumnType::from_dtype(column.dtype()),
            ColumnType::Integer | ColumnType::Float
        ) {
            align_column(&mut grid, idx + 1, CellAlignment::Right);
        }
    }

    for (pos, row) in table.rows().into_iter().enumerate() {
        let mut cells = vec![dim_cell(table.index_offset() + pos)];
        cells.extend(row.into_iter().map(value_cell));
        grid.add_row(cells);
    }
    grid
}

/// One `key: value` line per description field.
pub fn description_lines(description: &TableDescription) -> Vec<String> {
    let (rows, columns) = description.shape;
    vec![
        format!("shape: ({rows}, {columns})"),
        format!("columns: [{}]", description.columns.join(", ")),
        format!("dtypes: {}", description.dtypes),
        format!("null_count: {}", description.null_count),
        format!("total_nulls: {}", description.total_nulls),
    ]
}

/// One `key: value` line per quality metric.
pub fn quality_lines(quality: &QualityMetrics) -> Vec<String> {
    vec![
        format!("total_rows: {}", quality.total_rows),
        format!("total_columns: {}", quality.total_columns),
        format!("total_cells: {}", quality.total_cells),
        format!("null_cells: {}", quality.null_cells),
        format!(
            "completeness_percentage: {:?}",
            quality.completeness_percentage
        ),
        format!("has_duplicates: {}", quality.has_duplicates),
        format!("duplicate_count: {}", quality.duplicate_count),
    ]
}

fn apply_table_style(grid: &mut Grid) {
    grid.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(grid: &mut Grid, index: usize, alignment: CellAlignment) {
    if let Some(column) = grid.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: CellValue) -> Cell {
    match value {
        CellValue::Missing => dim_cell("null"),
        CellValue::Text(text) => Cell::new(text),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
