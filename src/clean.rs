// src/clean.rs
//
// Summary cleaning: turn a raw discrete-summary file into a table with
// snake-case columns, validated timestamps, and the -9999999 fill value
// mapped to missing.

use tracing::warn;

use crate::core::time;
use crate::error::CavaError;
use crate::labels::{self, ColumnLabel};
use crate::table::Table;

/// True for the sentinel the summaries use for "no measurement".
pub fn is_sentinel(cell: &str) -> bool {
    matches!(cell.trim().parse::<f64>(), Ok(v) if v == -9_999_999.0)
}

/// Clean one raw summary table. Returns the cleaned table plus the parsed
/// column labels (name / display name / unit) for the file's own headers.
pub fn clean_summary(
    mut raw: Table,
    expected_columns: &[String],
) -> Result<(Table, Vec<ColumnLabel>), CavaError> {
    // Rows with nothing in them at all
    raw.retain_rows(|r| r.iter().any(|c| !c.trim().is_empty()));

    // Spreadsheet exports sometimes grow trailing unnamed columns
    let unnamed: Vec<String> = raw
        .columns
        .iter()
        .filter(|c| c.trim().is_empty() || c.to_lowercase().contains("unnamed"))
        .cloned()
        .collect();
    if !unnamed.is_empty() {
        warn!("extra unnamed columns found, dropping: {}", unnamed.join(", "));
        let refs: Vec<&str> = unnamed.iter().map(String::as_str).collect();
        raw.drop_columns(&refs);
    }

    // One label per remaining column, aligned by position
    let column_labels: Vec<ColumnLabel> = raw
        .columns
        .iter()
        .map(|h| {
            labels::parse_label(h).unwrap_or_else(|| ColumnLabel {
                name: h.to_lowercase().replace(' ', "_"),
                display_name: h.clone(),
                unit: None,
            })
        })
        .collect();

    let names: Vec<String> = column_labels.iter().map(|l| l.name.clone()).collect();
    let missing: Vec<&String> = expected_columns
        .iter()
        .filter(|c| !names.contains(c))
        .collect();
    if !missing.is_empty() {
        warn!(
            "missing columns: {}",
            missing.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
        );
    }
    raw.columns = names;

    // Fill sentinel → missing, everywhere
    for row in &mut raw.rows {
        for cell in row.iter_mut() {
            if is_sentinel(cell) {
                cell.clear();
            }
        }
    }

    let cruise_ix = raw
        .col("cruise")
        .ok_or_else(|| CavaError::Parse(s!("summary has no cruise column")))?;
    raw.retain_rows(|r| !r[cruise_ix].trim().is_empty());

    // Timestamp columns: drop rows without a value, normalize the rest
    let time_cols: Vec<String> = raw
        .columns
        .iter()
        .filter(|c| c.contains("time"))
        .cloned()
        .collect();
    for col in &time_cols {
        let ix = raw.col(col).unwrap();
        raw.retain_rows(|r| !r[ix].trim().is_empty());
        raw.map_column(col, |cell| match time::normalize_datetime(cell) {
            Some(dt) => dt,
            None => {
                warn!("invalid time str: {cell}");
                s!()
            }
        });
        // Rows whose timestamp failed to parse go too
        raw.retain_rows(|r| !r[ix].is_empty());
    }

    if raw.any_missing("station") {
        warn!("missing values found in station!");
    }

    Ok((raw, column_labels))
}

/// Validate value columns: anything that should be a float but isn't gets
/// replaced with missing, one warning per column.
pub fn check_types(table: &mut Table) {
    let value_marks = ["ctd", "discrete", "calculated"];
    let value_cols: Vec<String> = table
        .columns
        .iter()
        .filter(|c| {
            value_marks.iter().any(|m| c.contains(m))
                && !c.contains("file")
                && !c.contains("bottle_closure_time")
                && !c.contains("flag")
        })
        .cloned()
        .collect();

    for col in value_cols {
        let ix = table.col(&col).unwrap();
        let mut invalid: Vec<String> = Vec::new();
        for row in &table.rows {
            let cell = row[ix].trim();
            if !cell.is_empty() && cell.parse::<f64>().is_err() && !invalid.iter().any(|v| v == cell)
            {
                invalid.push(cell.to_string());
            }
        }
        if invalid.is_empty() {
            continue;
        }
        warn!(
            "** {col} ** contains invalid float values: {}, replacing with missing",
            invalid.join(",")
        );
        for row in &mut table.rows {
            let cell = row[ix].trim();
            if !cell.is_empty() && cell.parse::<f64>().is_err() {
                row[ix].clear();
            }
        }
    }
}
