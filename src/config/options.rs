// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

/// Which cruises a collection run covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CruiseSelector {
    All,
    One(String),
    Ids(Vec<String>),
}

/// File kinds found in a cruise folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Readme,
    Summary,
    All,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Readme => "readme",
            ContentKind::Summary => "summary",
            ContentKind::All => "all",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub cruises: CruiseSelector,
    pub kind: ContentKind,
    pub latest_only: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            cruises: CruiseSelector::All,
            kind: ContentKind::Summary,
            latest_only: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerArray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = self.format.ext();
                path.push(join!(stem, ".", ext));
            }
            ExportType::PerArray => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem. A pasted extension is ignored;
    /// `format` controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerArray => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn set_subdir(&mut self, subdir: &str) {
        self.out_path.dir = PathBuf::from(DEFAULT_OUT_DIR).join(subdir);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_CONTENTS_SUBDIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
