// src/labels.rs
//
// Discrete-summary column headers carry a display name and an optional
// bracketed unit, e.g. "CTD Temperature 1 [deg C]". This module splits
// them apart, repairs known source typos, and produces the snake-case
// names the rest of the pipeline keys on.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(((\w+-?\w?)\s?)+)(\[.*\])?").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLabel {
    /// Snake-case key, e.g. `ctd_temperature_1`.
    pub name: String,
    /// Human-readable name, e.g. `CTD Temperature 1`.
    pub display_name: String,
    /// Unit without brackets, e.g. `deg C`.
    pub unit: Option<String>,
}

/// Repair known typos in source headers before snake-casing.
pub fn check_name(name: &str) -> String {
    let low = name.to_lowercase();
    if low.contains("fluorescense") || low.contains("flourescence") {
        warn!("fluorescence is misspelled in {name:?}, fixing");
        name.replace("Fluorescense", "Fluorescence")
            .replace("Flourescence", "Fluorescence")
    } else if low.contains("start positioning") {
        warn!("start positioning found in {name:?}, replacing with Start Position");
        s!("Bottom Depth at Start Position")
    } else if low.contains("phanalysis") {
        warn!("pH Analysis is strung together in {name:?}, fixing");
        name.replace("pHAnalysis", "pH Analysis")
    } else {
        name.to_string()
    }
}

/// Split a raw header into a `ColumnLabel`. Returns `None` when the header
/// has no usable name part.
pub fn parse_label(header: &str) -> Option<ColumnLabel> {
    let caps = LABEL_RE.captures(header)?;
    let raw_name = caps.get(1)?.as_str().trim();
    if raw_name.is_empty() {
        return None;
    }
    let unit = caps
        .get(4)
        .map(|m| m.as_str().trim_start_matches('[').trim_end_matches(']').to_string());
    let display_name = check_name(raw_name);
    let name = display_name.to_lowercase().replace(' ', "_");
    Some(ColumnLabel {
        name,
        display_name,
        unit,
    })
}

/// Parse a whole header row; headers with no name part are skipped.
pub fn parse_labels<S: AsRef<str>>(headers: &[S]) -> Vec<ColumnLabel> {
    headers
        .iter()
        .filter_map(|h| parse_label(h.as_ref()))
        .collect()
}
