use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span};

use tabscope_ingest::load;
use tabscope_inspect::{assess_quality, describe, first_rows, last_rows};
use tabscope_model::{QualityMetrics, Table, TableDescription};

/// Everything the report prints, computed before anything is printed.
#[derive(Debug)]
pub struct Inspection {
    pub table: Table,
    /// Rows requested for the tail window.
    pub tail_rows: usize,
    pub tail: Table,
    pub head: Table,
    pub description: TableDescription,
    pub quality: QualityMetrics,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    description: &'a TableDescription,
    quality: &'a QualityMetrics,
}

/// Loads `path` and runs every inspection over it.
///
/// # Errors
///
/// Returns the first load or window error unchanged.
pub fn inspect(path: &Path, head_rows: usize, tail_rows: usize) -> Result<Inspection> {
    let span = info_span!("inspect", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = load(path)?;
    let tail = last_rows(&table, tail_rows)?;
    let head = first_rows(&table, head_rows)?;
    let description = describe(&table);
    let quality = assess_quality(&table);

    info!(
        rows = table.height(),
        columns = table.width(),
        duplicates = quality.duplicate_count,
        elapsed = ?start.elapsed(),
        "inspection complete"
    );
    Ok(Inspection {
        table,
        tail_rows,
        tail,
        head,
        description,
        quality,
    })
}

/// The description and quality metrics as a pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json_report(inspection: &Inspection) -> Result<String> {
    let report = JsonReport {
        description: &inspection.description,
        quality: &inspection.quality,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
