// src/catalog.rs
//
// Embedded cruise source catalog: which cruises exist, which array each
// belongs to, and where its Alfresco folder lives. Also the expected
// discrete-summary header set used to sanity-check downloaded files.

use std::sync::LazyLock;

use crate::csv::parse_rows;
use crate::labels;

const SOURCE_CSV: &str = include_str!("data/source.csv");
const HEADER_MAP_CSV: &str = include_str!("data/header_map.csv");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cruise {
    pub cruise_id: String,
    pub array_rd: String,
    pub folder_url: String,
}

static CRUISES: LazyLock<Vec<Cruise>> = LazyLock::new(|| {
    let mut rows = parse_rows(SOURCE_CSV, ',');
    if !rows.is_empty() {
        rows.remove(0); // header
    }
    rows.into_iter()
        .filter(|r| r.len() >= 3)
        .map(|mut r| Cruise {
            folder_url: r.remove(2),
            array_rd: r.remove(1),
            cruise_id: r.remove(0),
        })
        .collect()
});

static EXPECTED_COLUMNS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut rows = parse_rows(HEADER_MAP_CSV, ',');
    if !rows.is_empty() {
        rows.remove(0); // header
    }
    let headers: Vec<String> = rows
        .into_iter()
        .filter_map(|r| r.into_iter().next())
        .collect();
    labels::parse_labels(&headers)
        .into_iter()
        .map(|l| l.name)
        .collect()
});

/// All known cruises, in catalog order.
pub fn cruises() -> &'static [Cruise] {
    &CRUISES
}

pub fn find(cruise_id: &str) -> Option<&'static Cruise> {
    CRUISES.iter().find(|c| c.cruise_id == cruise_id)
}

/// Snake-case names every summary file is expected to carry.
pub fn expected_columns() -> &'static [String] {
    &EXPECTED_COLUMNS
}
