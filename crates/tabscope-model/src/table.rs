#![deny(unsafe_code)]

use polars::prelude::{Column, DataFrame};

use crate::value::any_to_cell;

/// A single cell as seen by row comparison and rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellValue {
    Missing,
    Text(String),
}

/// An in-memory rectangular dataset.
///
/// Columns keep the order they were declared in. `index_offset` is the
/// position of the first row in the table this one was cut from, so a
/// window taken from the end still reports original row positions.
#[derive(Debug, Clone)]
pub struct Table {
    data: DataFrame,
    index_offset: usize,
}

impl Table {
    pub fn new(data: DataFrame) -> Self {
        Self {
            data,
            index_offset: 0,
        }
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self::new(DataFrame::empty())
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn index_offset(&self) -> usize {
        self.index_offset
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn columns(&self) -> &[Column] {
        self.data.get_columns()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    }

    /// Returns `len` rows starting at `offset`, clamped to the table bounds.
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        let offset = offset.min(self.height());
        let len = len.min(self.height() - offset);
        let start = i64::try_from(offset).unwrap_or(i64::MAX);
        Self {
            data: self.data.slice(start, len),
            index_offset: self.index_offset + offset,
        }
    }

    /// The cells of row `idx`, or `None` when out of bounds.
    pub fn row(&self, idx: usize) -> Option<Vec<CellValue>> {
        if idx >= self.height() {
            return None;
        }
        let cells = self
            .columns()
            .iter()
            .map(|column| {
                column
                    .get(idx)
                    .map(any_to_cell)
                    .unwrap_or(CellValue::Missing)
            })
            .collect();
        Some(cells)
    }

    /// All rows in order.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        (0..self.height()).filter_map(|idx| self.row(idx)).collect()
    }
}
