use std::fmt;

use polars::prelude::DataType;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Declared type of a column, as inferred by the CSV reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
    /// Every value in the column is absent.
    Null,
    /// Any other parser type, by its Polars name.
    Other(String),
}

impl ColumnType {
    pub fn from_dtype(dtype: &DataType) -> Self {
        if dtype.is_integer() {
            return Self::Integer;
        }
        if dtype.is_float() {
            return Self::Float;
        }
        match dtype {
            DataType::Boolean => Self::Boolean,
            DataType::String => Self::Text,
            DataType::Null => Self::Null,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Null => "null",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name → value, in column declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> ColumnMap<T> {
    pub fn get(&self, column: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<T> Default for ColumnMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<(String, T)> for ColumnMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for ColumnMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Renders as `{name: value, ...}`.
impl<T: fmt::Display> fmt::Display for ColumnMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

pub type ColumnTypes = ColumnMap<ColumnType>;
pub type NullCounts = ColumnMap<usize>;

/// Descriptive metadata of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescription {
    /// `(rows, columns)`.
    pub shape: (usize, usize),
    pub columns: Vec<String>,
    pub dtypes: ColumnTypes,
    pub null_count: NullCounts,
    pub total_nulls: usize,
}
