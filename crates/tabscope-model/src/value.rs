//! Polars `AnyValue` conversions.
//!
//! Cells are compared and rendered through their text form, so every value
//! a CSV column can hold needs a stable, lossless string.

use polars::prelude::AnyValue;

use crate::table::CellValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue into a [`CellValue`], keeping null distinct from
/// an empty string.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        other => CellValue::Text(any_to_string(other)),
    }
}

/// Formats a float so whole numbers keep one decimal place (`10.0`, not `10`).
/// Negative zero prints as `0.0`.
pub fn format_numeric(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_floats_with_decimal() {
        assert_eq!(format_numeric(10.0), "10.0");
        assert_eq!(format_numeric(-3.0), "-3.0");
        assert_eq!(format_numeric(2.5), "2.5");
        assert_eq!(format_numeric(f64::NAN), "NaN");
        assert_eq!(format_numeric(-0.0), "0.0");
    }

    #[test]
    fn strings_render_without_quotes() {
        assert_eq!(any_to_string(AnyValue::String("abc")), "abc");
        assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
    }

    #[test]
    fn null_and_empty_string_are_distinct_cells() {
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
        assert_eq!(
            any_to_cell(AnyValue::String("")),
            CellValue::Text(String::new())
        );
    }

    #[test]
    fn signed_zero_floats_are_the_same_cell() {
        assert_eq!(
            any_to_cell(AnyValue::Float64(-0.0)),
            any_to_cell(AnyValue::Float64(0.0))
        );
    }
}
