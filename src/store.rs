// src/store.rs
//
// Local CSV cache under .store/, keyed by dataset kind. Best-effort: a
// failed cache write is logged and swallowed, never fatal to a run.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::config::consts::{STORE_DIR, STORE_SEP};
use crate::csv::{parse_rows, write_row};
use crate::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    Contents,
    Profile,
    Discrete,
}

impl DatasetKind {
    fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Contents => "contents.csv",
            DatasetKind::Profile => "profile.csv",
            DatasetKind::Discrete => "discrete.csv",
        }
    }
}

pub fn save_table(kind: DatasetKind, table: &Table) -> io::Result<PathBuf> {
    save_table_in(Path::new(STORE_DIR), kind, table)
}

pub fn save_table_in(dir: &Path, kind: DatasetKind, table: &Table) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(kind.file_name());
    let file = fs::File::create(&path)?;
    let mut w = io::BufWriter::new(file);
    write_row(&mut w, &table.columns, STORE_SEP)?;
    for row in &table.rows {
        write_row(&mut w, row, STORE_SEP)?;
    }
    w.flush()?;
    Ok(path)
}

/// Save without letting cache trouble interrupt the caller.
pub fn save_table_best_effort(kind: DatasetKind, table: &Table) {
    if let Err(e) = save_table(kind, table) {
        warn!("could not cache {:?} dataset: {e}", kind);
    }
}

pub fn load_table(kind: DatasetKind) -> Option<Table> {
    load_table_in(Path::new(STORE_DIR), kind)
}

pub fn load_table_in(dir: &Path, kind: DatasetKind) -> Option<Table> {
    let text = fs::read_to_string(dir.join(kind.file_name())).ok()?;
    let rows = parse_rows(&text, STORE_SEP);
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new(rows[0].clone());
    for row in rows.into_iter().skip(1) {
        table.push_row(row);
    }
    Some(table)
}
