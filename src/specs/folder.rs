// src/specs/folder.rs
//! Spec for Alfresco folder-listing pages.
//!
//! The listing renders as a pair of `recordSet` tables; the second one holds
//! the file rows. Each file row carries an anchor with `target="new"` (file
//! name + href) and cells whose `id` ends in `col13-txt` (description),
//! `col15-txt` (size), `col16-txt` (created) and `col17-txt` (modified).

use tracing::warn;

use crate::core::html::{attr_value, next_tag_block_ci, opener, strip_tags, to_lower};
use crate::core::net::{url_origin, Fetcher};
use crate::core::sanitize::normalize_entities;
use crate::core::time;
use crate::error::CavaError;
use crate::table::Table;

pub const COLUMNS: &[&str] = &["name", "url", "description", "size", "created", "modified"];

/// Fetch and parse one cruise folder.
pub fn fetch(fetcher: &Fetcher, folder_url: &str) -> Result<Table, CavaError> {
    let doc = fetcher.get_text(folder_url)?;
    let origin = url_origin(folder_url)
        .ok_or_else(|| CavaError::InvalidInput(join!("bad folder url: ", folder_url)))?;
    parse_listing(&doc, &origin)
}

/// Parse a folder-listing document. `origin` (`scheme://host`) resolves the
/// relative hrefs in the listing.
pub fn parse_listing(doc: &str, origin: &str) -> Result<Table, CavaError> {
    let block = record_set_table(doc)
        .ok_or_else(|| CavaError::Parse(s!("recordSet table not found in listing")))?;

    let mut out = Table::new(COLUMNS.to_vec());

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(block, "<tr", "</tr>", pos) {
        let tr = &block[tr_s..tr_e];
        pos = tr_e;

        let Some((name, url)) = file_anchor(tr, origin) else {
            continue; // header or spacer row
        };

        let description = cell_text_by_id(tr, "col13-txt");
        let size = cell_text_by_id(tr, "col15-txt");
        let created = normalize_listing_time(&cell_text_by_id(tr, "col16-txt"));
        let modified = normalize_listing_time(&cell_text_by_id(tr, "col17-txt"));

        out.push_row(vec![name, url, description, size, created, modified]);
    }

    Ok(out)
}

/// The second `recordSet` table carries the file rows; fall back to the
/// first when the page only renders one.
fn record_set_table(doc: &str) -> Option<&str> {
    let mut found: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let op = to_lower(opener(&doc[ts..te]));
        if op.contains("recordset") {
            found.push((ts, te));
        }
        pos = te;
    }
    let (ts, te) = *found.get(1).or_else(|| found.first())?;
    Some(&doc[ts..te])
}

/// First `<a target="new">` in the row: (file name, absolute url).
fn file_anchor(tr: &str, origin: &str) -> Option<(String, String)> {
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_tag_block_ci(tr, "<a", "</a>", pos) {
        let a = &tr[a_s..a_e];
        pos = a_e;
        if attr_value(opener(a), "target").as_deref() != Some("new") {
            continue;
        }
        let href = attr_value(opener(a), "href")?;
        let name = strip_tags(&normalize_entities(a));
        if name.is_empty() {
            continue;
        }
        let url = if href.starts_with("http") {
            href
        } else {
            join!(origin, href)
        };
        return Some((name, url));
    }
    None
}

/// Immediate text following the element whose `id` contains `id_frag`.
fn cell_text_by_id(tr: &str, id_frag: &str) -> String {
    let lc = to_lower(tr);
    let Some(found) = lc.find(id_frag) else {
        return s!();
    };
    let Some(gt_rel) = tr[found..].find('>') else {
        return s!();
    };
    let text_start = found + gt_rel + 1;
    let text_end = tr[text_start..]
        .find('<')
        .map(|e| text_start + e)
        .unwrap_or(tr.len());
    strip_tags(&normalize_entities(&tr[text_start..text_end]))
}

fn normalize_listing_time(raw: &str) -> String {
    if raw.trim().is_empty() {
        return s!();
    }
    match time::normalize_datetime(raw) {
        Some(dt) => dt,
        None => {
            warn!("unparsable listing timestamp: {raw}");
            raw.to_string()
        }
    }
}
