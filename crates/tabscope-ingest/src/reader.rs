//! CSV file reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, NullValues, PolarsError, SerReader};
use tabscope_model::Table;
use tracing::{debug, debug_span, warn};

use crate::error::{IngestError, Result};

/// Tables wider than this are loaded, but logged as a warning.
pub const MAX_COLUMNS_BEFORE_WARNING: usize = 500;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Field values read as missing, in addition to empty fields.
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Fails with [`IngestError::EmptyInput`] unless some line holds more
/// than whitespace. Stops at the first such line.
fn ensure_has_content(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path.to_path_buf(), e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            return Err(IngestError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
        let content = line.strip_prefix(&UTF8_BOM).unwrap_or(&line);
        if !content.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
    }
}

fn parse_error(path: &Path, err: PolarsError) -> IngestError {
    match err {
        PolarsError::NoData(_) => IngestError::EmptyInput {
            path: path.to_path_buf(),
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Loads a comma-separated file into a [`Table`].
///
/// The first line names the columns. Types are inferred over the whole
/// file. Empty fields and the [`NULL_TOKENS`] become nulls. A header-only
/// file yields a table with columns and no rows.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] if nothing exists at `path`.
/// - [`IngestError::EmptyInput`] if the file has no header.
/// - [`IngestError::CsvParse`] if the parser cannot tokenize the content.
/// - [`IngestError::FileRead`] for any other I/O failure.
pub fn load(path: &Path) -> Result<Table> {
    let _span = debug_span!("load", path = %path.display()).entered();

    ensure_has_content(path)?;

    let null_values =
        NullValues::AllColumns(NULL_TOKENS.iter().map(|&token| token.into()).collect());
    let data = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| parse_error(path, e))?
        .finish()
        .map_err(|e| parse_error(path, e))?;

    if data.width() > MAX_COLUMNS_BEFORE_WARNING {
        warn!(
            path = %path.display(),
            columns = data.width(),
            "table has more than {MAX_COLUMNS_BEFORE_WARNING} columns"
        );
    }
    debug!(rows = data.height(), columns = data.width(), "loaded csv");

    Ok(Table::new(data))
}
