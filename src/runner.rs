// src/runner.rs
use std::path::PathBuf;

use crate::api;
use crate::config::consts::{DEFAULT_DISCRETE_SUBDIR, DEFAULT_PROFILE_SUBDIR};
use crate::config::options::{ContentKind, ExportOptions, ExportType, FetchOptions};
use crate::error::CavaError;
use crate::file::{write_export_per_array, write_export_single};
use crate::progress::{NullProgress, Progress};
use crate::store::{self, DatasetKind};
use crate::table::Table;

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    /// Stop after the contents listing (no summary download/clean).
    pub contents_only: bool,
    /// Reuse the cached contents listing instead of refetching folders.
    pub use_cached_contents: bool,
    /// Derive the profile/discrete products instead of exporting the
    /// cleaned summaries as-is.
    pub split: bool,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: collect → filter → clean → (split) → export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, CavaError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let contents = match opts.use_cached_contents {
        true => store::load_table(DatasetKind::Contents).ok_or_else(|| {
            CavaError::InvalidInput(s!("no cached contents listing, run without --cached first"))
        })?,
        false => {
            progress.log("Fetching cruise folder contents…");
            let contents = api::collect_contents(&opts.fetch.cruises, &mut *progress)?;
            store::save_table_best_effort(DatasetKind::Contents, &contents);
            contents
        }
    };

    // Cleaning only works on summary files; contents-only runs keep the
    // caller's kind choice.
    let kind = if opts.contents_only {
        opts.fetch.kind
    } else {
        ContentKind::Summary
    };
    let mut filtered = api::filter_contents(&contents, kind)?;
    if opts.fetch.latest_only {
        filtered = api::latest_contents(&filtered)?;
    }

    if opts.contents_only {
        let path = write_export_single(&opts.export, &filtered)?;
        return Ok(RunSummary {
            files_written: vec![path],
        });
    }

    progress.log("Reading and cleaning summaries…");
    let cleaned = api::read_and_clean(&filtered, &mut *progress)?;

    let mut written = Vec::new();
    if opts.split {
        let sd = api::split_summary_data(&cleaned)?;
        store::save_table_best_effort(DatasetKind::Profile, &sd.profile);
        store::save_table_best_effort(DatasetKind::Discrete, &sd.discrete);

        let mut profile_export = opts.export.clone();
        profile_export.set_subdir(DEFAULT_PROFILE_SUBDIR);
        let mut discrete_export = opts.export.clone();
        discrete_export.set_subdir(DEFAULT_DISCRETE_SUBDIR);

        written.extend(export_table(&profile_export, &sd.profile)?);
        written.extend(export_table(&discrete_export, &sd.discrete)?);
    } else {
        // Tag each per-array table and merge for export.
        let mut merged = Table::default();
        for (array_rd, table) in &cleaned.tables {
            let mut t = table.clone();
            t.add_const_column("array_rd", array_rd);
            merged.append(t);
        }
        written.extend(export_table(&opts.export, &merged)?);
    }

    progress.finish();
    Ok(RunSummary {
        files_written: written,
    })
}

fn export_table(export: &ExportOptions, table: &Table) -> Result<Vec<PathBuf>, CavaError> {
    match export.export_type {
        ExportType::SingleFile => Ok(vec![write_export_single(export, table)?]),
        ExportType::PerArray => write_export_per_array(export, table),
    }
}
