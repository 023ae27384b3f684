// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::to_export_string;
use crate::error::CavaError;
use crate::table::Table;

/// Write one export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(export: &ExportOptions, table: &Table) -> Result<PathBuf, CavaError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        Some(&table.columns),
        &table.rows,
        export.include_headers,
        export.format.delim(),
    );
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per array into the directory implied by `export.out_path()`
/// (which must be a directory when `export_type == PerArray`). Rows are
/// grouped by the `array_rd` column.
pub fn write_export_per_array(
    export: &ExportOptions,
    table: &Table,
) -> Result<Vec<PathBuf>, CavaError> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let groups = table.group_indices("array_rd");
    if groups.is_empty() {
        return Err(CavaError::InvalidInput(s!(
            "per-array export needs an array_rd column"
        )));
    }

    // Dedup stems within this run and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(groups.len());
    let ext = export.format.ext();

    for (array_rd, ix) in groups {
        let part = table.take_rows(&ix);
        let stem = sanitize_filename(&array_rd, "array");
        let path = resolve_export_filename(&outdir, &stem, &mut seen, ext);

        let contents = to_export_string(
            Some(&part.columns),
            &part.rows,
            export.include_headers,
            export.format.delim(),
        );
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), CavaError> {
    if dir.exists() && !dir.is_dir() {
        return Err(CavaError::InvalidInput(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**:
/// first occurrence `<stem>.ext`, then `<stem> (N).ext` with N from 2.
pub fn resolve_export_filename(
    dir: &Path,
    stem: &str, // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };
    *count += 1;
    dir.join(filename)
}
