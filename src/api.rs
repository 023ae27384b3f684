// src/api.rs
//
// The collection pipeline: fetch cruise folder listings, narrow them to the
// summary files, download and clean the summaries, and hand the result to
// the split step. Fetching fans out over a small worker pool; everything
// else is straight-line.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc,
};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::catalog::{self, Cruise};
use crate::clean::{check_types, clean_summary};
use crate::config::consts::{JITTER_MS, MODIFIED_CUTOFF, REQUEST_PAUSE_MS, WORKERS};
use crate::config::options::{ContentKind, CruiseSelector};
use crate::core::net::Fetcher;
use crate::core::time;
use crate::error::CavaError;
use crate::labels::ColumnLabel;
use crate::progress::Progress;
use crate::specs::folder;
use crate::split::{self, SplitData};
use crate::table::Table;

fn resolve_cruises(sel: &CruiseSelector) -> Result<Vec<Cruise>, CavaError> {
    match sel {
        CruiseSelector::All => Ok(catalog::cruises().to_vec()),
        CruiseSelector::One(id) => Ok(vec![catalog::find(id)
            .ok_or_else(|| CavaError::UnknownCruise(id.clone()))?
            .clone()]),
        CruiseSelector::Ids(ids) => ids
            .iter()
            .map(|id| {
                catalog::find(id)
                    .cloned()
                    .ok_or_else(|| CavaError::UnknownCruise(id.clone()))
            })
            .collect(),
    }
}

/// All known `(cruise_id, array_rd)` pairs, catalog order.
pub fn list_cruises() -> Vec<(String, String)> {
    catalog::cruises()
        .iter()
        .map(|c| (c.cruise_id.clone(), c.array_rd.clone()))
        .collect()
}

/// Fetch folder contents for the selected cruises. Rows are tagged with a
/// `cruise_id` column and come back in catalog order. Per-cruise fetch
/// failures are reported and skipped, not fatal.
pub fn collect_contents(
    sel: &CruiseSelector,
    progress: &mut dyn Progress,
) -> Result<Table, CavaError> {
    let cruises = resolve_cruises(sel)?;

    progress.begin(cruises.len());

    type FetchOk = (usize, Table);
    type FetchErr = (usize, String);

    let cruises_arc = Arc::new(cruises);
    let cursor = Arc::new(AtomicUsize::new(0));
    let fetcher = Arc::new(Fetcher::new());
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(cruises_arc.len()).max(1);

    for _ in 0..workers {
        let cruises = Arc::clone(&cruises_arc);
        let cursor = Arc::clone(&cursor);
        let fetcher = Arc::clone(&fetcher);
        let tx = res_tx.clone();

        thread::spawn(move || loop {
            let i = cursor.fetch_add(1, Ordering::Relaxed);
            if i >= cruises.len() {
                break;
            }
            let cruise = &cruises[i];
            let result = match folder::fetch(&fetcher, &cruise.folder_url) {
                Ok(mut table) => {
                    table.add_const_column("cruise_id", &cruise.cruise_id);
                    Ok((i, table))
                }
                Err(e) => Err((i, e.to_string())),
            };
            let _ = tx.send(result);
            let jitter = (i as u64) % JITTER_MS;
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut per_cruise: Vec<(usize, Table)> = Vec::new();
    for _ in 0..cruises_arc.len() {
        match res_rx.recv() {
            Ok(Ok((i, table))) => {
                progress.item_done(&cruises_arc[i].cruise_id);
                per_cruise.push((i, table));
            }
            Ok(Err((i, msg))) => {
                let id = &cruises_arc[i].cruise_id;
                warn!("cruise {id}: {msg}");
                progress.item_failed(id);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    progress.finish();

    per_cruise.sort_by_key(|(i, _)| *i);
    let mut merged = Table::default();
    for (_, table) in per_cruise {
        merged.append(table);
    }
    Ok(merged)
}

/// Narrow a contents table to README / Discrete_Summary files modified
/// after the cutoff, tagging each row with its `kind`.
pub fn filter_contents(contents: &Table, kind: ContentKind) -> Result<Table, CavaError> {
    let name_ix = contents
        .col("name")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a name column")))?;
    let modified_ix = contents
        .col("modified")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a modified column")))?;

    let mut filtered = contents.clone();
    filtered.retain_rows(|r| {
        let name = &r[name_ix];
        if !(name.contains("README") || name.contains("Discrete_Summary")) || name.contains(".xls")
        {
            return false;
        }
        // The listing parser passes unparsable timestamps through raw, so
        // reparse before comparing against the cutoff.
        match time::normalize_datetime(&r[modified_ix]) {
            Some(modified) => modified.as_str() > MODIFIED_CUTOFF,
            None => {
                warn!("unparsable modified timestamp for {name}: {:?}", r[modified_ix]);
                false
            }
        }
    });

    // Surviving rows keep the canonical form so `latest_contents` can order
    // them by plain string compare.
    filtered.map_column("modified", |m| {
        time::normalize_datetime(m).unwrap_or_else(|| m.to_string())
    });

    filtered.add_column_with("kind", |row| {
        if row[name_ix].contains("README") {
            s!("readme")
        } else {
            s!("summary")
        }
    });

    if kind != ContentKind::All {
        let kind_ix = filtered.col("kind").unwrap();
        filtered.retain_rows(|r| r[kind_ix] == kind.label());
    }
    Ok(filtered)
}

/// Keep only the most recently modified file per cruise (and per kind,
/// when the `kind` column is present).
pub fn latest_contents(contents: &Table) -> Result<Table, CavaError> {
    if !contents.has_col("cruise_id") {
        return Err(CavaError::InvalidInput(s!(
            "contents table must have a cruise_id column"
        )));
    }
    let modified_ix = contents
        .col("modified")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a modified column")))?;

    let groups = if contents.has_col("kind") {
        let cruise_ix = contents.col("cruise_id").unwrap();
        let kind_ix = contents.col("kind").unwrap();
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        for (i, row) in contents.rows.iter().enumerate() {
            let key = join!(row[cruise_ix].clone(), "\u{1f}", row[kind_ix]);
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, v)) => v.push(i),
                None => groups.push((key, vec![i])),
            }
        }
        groups
    } else {
        contents.group_indices("cruise_id")
    };

    let mut keep: Vec<usize> = groups
        .into_iter()
        .filter_map(|(_, ix)| {
            ix.into_iter()
                .max_by(|&a, &b| contents.rows[a][modified_ix].cmp(&contents.rows[b][modified_ix]))
        })
        .collect();
    keep.sort_unstable();
    Ok(contents.take_rows(&keep))
}

/// Cleaned summary data grouped by array reference designator, plus the
/// column labels observed per array.
#[derive(Clone, Debug, Default)]
pub struct CleanedSummaries {
    pub tables: Vec<(String, Table)>,
    pub labels: Vec<(String, Vec<ColumnLabel>)>,
}

/// Download and clean every summary file in `contents`. The table must hold
/// only `summary` rows (run `filter_contents` + `latest_contents` first).
pub fn read_and_clean(
    contents: &Table,
    progress: &mut dyn Progress,
) -> Result<CleanedSummaries, CavaError> {
    let kind_ix = contents
        .col("kind")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a kind column")))?;
    let mut kinds: Vec<&str> = contents.rows.iter().map(|r| r[kind_ix].as_str()).collect();
    kinds.sort_unstable();
    kinds.dedup();
    if kinds.len() > 1 {
        return Err(CavaError::InvalidInput(s!(
            "multiple kinds of files are not acceptable"
        )));
    }
    if kinds.first() != Some(&"summary") {
        return Err(CavaError::InvalidInput(s!("only summary files are accepted")));
    }

    let cruise_ix = contents
        .col("cruise_id")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a cruise_id column")))?;
    let url_ix = contents
        .col("url")
        .ok_or_else(|| CavaError::InvalidInput(s!("contents table must have a url column")))?;

    progress.begin(contents.len());

    let fetcher = Fetcher::new();
    let expected = catalog::expected_columns();
    let mut out = CleanedSummaries::default();

    for row in &contents.rows {
        let cruise_id = &row[cruise_ix];
        let url = &row[url_ix];
        let cruise = catalog::find(cruise_id)
            .ok_or_else(|| CavaError::UnknownCruise(cruise_id.clone()))?;
        info!("reading summary for {cruise_id}: {url}");

        if !url.ends_with(".csv") {
            // Some older cruises published xlsx; no spreadsheet decoding here.
            warn!("skipping non-csv summary: {url}");
            progress.item_failed(cruise_id);
            continue;
        }

        let text = fetcher.get_text(url)?;
        let raw = Table::from_delimited(&text, ',');
        let (mut cleaned, column_labels) = clean_summary(raw, expected)?;

        if cruise.array_rd == "CE" {
            fix_station_zeros(&mut cleaned);
        }
        cleaned.add_const_column("cruise_id", cruise_id);
        check_types(&mut cleaned);

        match out.tables.iter_mut().find(|(a, _)| *a == cruise.array_rd) {
            Some((_, t)) => t.append(cleaned),
            None => out.tables.push((cruise.array_rd.clone(), cleaned)),
        }
        // Last cruise's labels win per array, matching how revisions supersede.
        out.labels.retain(|(a, _)| *a != cruise.array_rd);
        out.labels.push((cruise.array_rd.clone(), column_labels));

        progress.item_done(cruise_id);
    }

    progress.finish();
    Ok(out)
}

/// Endurance station names occasionally ship with the letter `O` where a
/// zero belongs (e.g. "CEO2SHSM"). Fix them up, loudly.
fn fix_station_zeros(table: &mut Table) {
    let Some(ix) = table.col("station") else {
        return;
    };
    let mut seen: Vec<String> = Vec::new();
    for row in &table.rows {
        let st = &row[ix];
        if st.contains('O') && !seen.contains(st) {
            warn!("{st} found! fixing to {}", st.replace('O', "0"));
            seen.push(st.clone());
        }
    }
    table.map_column("station", |st| st.replace('O', "0"));
}

/// Split cleaned summaries into the profile and discrete products.
pub fn split_summary_data(cleaned: &CleanedSummaries) -> Result<SplitData, CavaError> {
    split::split_summaries(&cleaned.tables)
}
