// src/cli.rs
use std::env;

use crate::config::options::{ContentKind, CruiseSelector, ExportFormat, ExportType};
use crate::error::CavaError;
use crate::progress::Progress;
use crate::runner::{self, RunOptions};

pub fn run() -> Result<(), CavaError> {
    let mut opts = RunOptions::default();
    let mut list_cruises = false;
    parse_args(&mut opts, &mut list_cruises, env::args().skip(1))?;

    if list_cruises {
        for (id, array_rd) in crate::api::list_cruises() {
            println!("{},{}", id, array_rd);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn parse_args<I>(opts: &mut RunOptions, list_cruises: &mut bool, args: I) -> Result<(), CavaError>
where
    I: IntoIterator<Item = String>,
{
    let bad = |msg: String| CavaError::InvalidInput(msg);

    let mut args = args.into_iter();
    let mut out: Option<String> = None;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list-cruises" => *list_cruises = true,
            "-c" | "--cruise" => {
                let v = args.next().ok_or_else(|| bad(s!("Missing cruise id")))?;
                opts.fetch.cruises = CruiseSelector::One(v);
            }
            "--cruises" => {
                let v = args
                    .next()
                    .ok_or_else(|| bad(s!("Missing value for --cruises")))?;
                let ids: Vec<String> = v
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if ids.is_empty() {
                    return Err(bad(s!("Empty value for --cruises")));
                }
                opts.fetch.cruises = CruiseSelector::Ids(ids);
            }
            "--kind" => {
                let v = args
                    .next()
                    .ok_or_else(|| bad(s!("Missing value for --kind")))?;
                opts.fetch.kind = match v.to_ascii_lowercase().as_str() {
                    "readme" => ContentKind::Readme,
                    "summary" => ContentKind::Summary,
                    "all" => ContentKind::All,
                    other => return Err(bad(format!("Unrecognized kind: {}", other))),
                };
            }
            "--all-revisions" => opts.fetch.latest_only = false,
            "--contents-only" => opts.contents_only = true,
            "--cached" => opts.use_cached_contents = true,
            "--split" => opts.split = true,
            "-o" | "--out" => {
                out = Some(args.next().ok_or_else(|| bad(s!("Missing output path")))?);
            }
            "--format" => {
                let v = args
                    .next()
                    .ok_or_else(|| bad(s!("Missing value for --format")))?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(bad(format!("Unknown format: {}", other))),
                };
            }
            "--per-array" => opts.export.export_type = ExportType::PerArray,
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(bad(format!("Unknown arg: {}", a))),
        }
    }

    // How the path splits into dir/stem depends on the export type, so the
    // destination is applied only once every flag is in.
    if let Some(v) = out {
        opts.export.set_path(&v);
    }

    Ok(())
}

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, cruise_id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, cruise_id);
    }
    fn item_failed(&mut self, cruise_id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {} FAILED", self.done, self.total, cruise_id);
    }
}
