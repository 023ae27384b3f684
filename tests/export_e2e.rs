// tests/export_e2e.rs
//
// Export-layer tests: single-file and per-array writing, delimiters,
// filename dedup. Everything goes to a temp dir.
//
use std::collections::HashMap;
use std::fs;

use cava_tools::config::options::{ExportFormat, ExportOptions, ExportType};
use cava_tools::file::{resolve_export_filename, write_export_per_array, write_export_single};
use cava_tools::table::Table;

fn sample() -> Table {
    let mut t = Table::new(vec!["cruise_id", "ctd_pressure", "array_rd"]);
    t.push_row(vec!["TN326".into(), "100.2".into(), "RS".into()]);
    t.push_row(vec!["TN326".into(), "80,5".into(), "RS".into()]);
    t.push_row(vec!["OC1611A".into(), "12.0".into(), "CE".into()]);
    t
}

#[test]
fn default_path_tracks_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    assert!(opts.out_path().to_string_lossy().ends_with(".csv"));
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with(".tsv"));
}

#[test]
fn single_file_export_with_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(dir.path().join("summary.csv").to_string_lossy().as_ref());

    let path = write_export_single(&opts, &sample()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("cruise_id,ctd_pressure,array_rd"));
    assert_eq!(lines.next(), Some("TN326,100.2,RS"));
    // a cell containing the delimiter gets quoted
    assert_eq!(lines.next(), Some("TN326,\"80,5\",RS"));
}

#[test]
fn single_file_export_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.include_headers = false;
    opts.set_path(dir.path().join("bare.csv").to_string_lossy().as_ref());

    let path = write_export_single(&opts, &sample()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("TN326,100.2,RS"));
}

#[test]
fn tsv_export_uses_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.path().join("summary.tsv").to_string_lossy().as_ref());

    let path = write_export_single(&opts, &sample()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("cruise_id\tctd_pressure\tarray_rd"));
    // comma no longer needs quoting
    assert!(text.contains("TN326\t80,5\tRS"));
}

#[test]
fn per_array_export_groups_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerArray;
    opts.set_path(dir.path().to_string_lossy().as_ref());

    let written = write_export_per_array(&opts, &sample()).unwrap();
    assert_eq!(written.len(), 2);

    let rs = fs::read_to_string(dir.path().join("RS.csv")).unwrap();
    assert_eq!(rs.lines().count(), 3); // header + 2 rows
    let ce = fs::read_to_string(dir.path().join("CE.csv")).unwrap();
    assert!(ce.contains("OC1611A"));
}

#[test]
fn per_array_export_needs_array_column() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerArray;
    opts.set_path(dir.path().to_string_lossy().as_ref());

    let mut t = Table::new(vec!["a"]);
    t.push_row(vec!["1".into()]);
    assert!(write_export_per_array(&opts, &t).is_err());
}

#[test]
fn filename_dedup_within_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut seen = HashMap::new();
    let p1 = resolve_export_filename(dir.path(), "RS", &mut seen, "csv");
    let p2 = resolve_export_filename(dir.path(), "RS", &mut seen, "csv");
    let p3 = resolve_export_filename(dir.path(), "CE", &mut seen, "csv");
    assert!(p1.ends_with("RS.csv"));
    assert!(p2.ends_with("RS (2).csv"));
    assert!(p3.ends_with("CE.csv"));
}
