// src/split.rs
//
// Derivation of the profile and discrete products from cleaned summary
// tables: coalesced double sensors, the YYYY-MM date key, station → area
// mapping, and the column splits.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::time;
use crate::error::CavaError;
use crate::table::Table;

static AREA_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(oregon\s+)?slope\s+base", "oregon-slope-base"),
        (r"axial\s+base", "axial-base"),
        (r"axial.*international\s+district", "axial-caldera"),
        (r"axial\s+caldera", "axial-caldera"),
        (r"(southern\s+)?hydrate\s+ridge", "southern-hydrate-ridge"),
        (r"mid\s+plate", "mid-plate"),
        (r"oregon\s+inshore|ce01", "oregon-inshore"),
        (r"oregon\s+shelf|ce02", "oregon-shelf"),
        (r"oregon\s+offshore|ce04", "oregon-offshore"),
        (r"washington\s+inshore|ce06", "washington-inshore"),
        (r"washington\s+shelf|ce07", "washington-shelf"),
        (r"washington\s+offshore|ce09", "washington-offshore"),
    ]
    .iter()
    .map(|(pat, area)| (Regex::new(pat).unwrap(), *area))
    .collect()
});

/// Map a station name to its area reference designator.
/// Empty stations map to an empty area; an unrecognized station is an error
/// so new deployments surface instead of landing in the wrong bin.
pub fn area_for_station(station: &str) -> Result<&'static str, CavaError> {
    if station.trim().is_empty() {
        return Ok("");
    }
    let st = station.to_lowercase();
    for (re, area) in AREA_PATTERNS.iter() {
        if re.is_match(&st) {
            return Ok(area);
        }
    }
    Err(CavaError::UnknownArea(st))
}

/// Casts carry two CTD sensor pairs; prefer `_1` and fall back to `_2`.
const DOUBLE_SENSORS: &[&str] = &["ctd_temperature", "ctd_conductivity", "ctd_salinity"];

fn coalesce_double_sensors(table: &mut Table) {
    for var in DOUBLE_SENSORS {
        let Some(ix1) = table.col(&join!(*var, "_1")) else {
            continue;
        };
        let ix2 = table.col(&join!(*var, "_2"));
        table.add_column_with(var, |row| {
            if !row[ix1].is_empty() {
                row[ix1].clone()
            } else {
                match ix2 {
                    Some(ix2) => row[ix2].clone(),
                    None => s!(),
                }
            }
        });
    }
}

const PROFILE_KEEP: &[&str] = &["ctd", "date", "area_rd", "cruise_id"];
const PROFILE_DROP: &[&str] = &[
    "flag",
    "file",
    "bottle_closure_time",
    "depth",
    "latitude",
    "longitude",
    "beam_attenuation",
    "oxygen_saturation",
    "_2",
    "_1",
];
const DISCRETE_KEEP: &[&str] = &[
    "area_rd",
    "cruise_id",
    "date",
    "ctd_pressure",
    "discrete",
    "calculated",
];

/// Split one cleaned per-array table into (profile, discrete).
pub fn parse_profile_and_discrete(
    mut sample: Table,
    array_rd: &str,
) -> Result<(Table, Table), CavaError> {
    coalesce_double_sensors(&mut sample);

    let start_ix = sample
        .col("start_time")
        .ok_or_else(|| CavaError::Parse(s!("cleaned summary has no start_time column")))?;
    sample.add_column_with("date", |row| {
        time::year_month(&row[start_ix]).unwrap_or_default()
    });

    let station_ix = sample.col("station");
    let mut areas = Vec::with_capacity(sample.len());
    for row in &sample.rows {
        let station = station_ix.map(|ix| row[ix].as_str()).unwrap_or("");
        areas.push(s!(area_for_station(station)?));
    }
    let mut area_iter = areas.into_iter();
    sample.add_column_with("area_rd", |_| area_iter.next().unwrap_or_default());

    let mut profile = sample.select_columns(|c| {
        PROFILE_KEEP.iter().any(|k| c.contains(k)) && !PROFILE_DROP.iter().any(|k| c.contains(k))
    });
    profile.add_const_column("array_rd", array_rd);

    let mut discrete = sample
        .select_columns(|c| DISCRETE_KEEP.iter().any(|k| c.contains(k)) && !c.contains("flag"));
    discrete.add_const_column("array_rd", array_rd);

    Ok((profile, discrete))
}

#[derive(Clone, Debug, Default)]
pub struct SplitData {
    pub profile: Table,
    pub discrete: Table,
}

/// Split every per-array table and concatenate the results.
/// Calculated carbon columns that are entirely missing for an array are
/// dropped before concatenation.
pub fn split_summaries(per_array: &[(String, Table)]) -> Result<SplitData, CavaError> {
    let mut all_profile = Table::default();
    let mut all_discrete = Table::default();

    for (array_rd, table) in per_array {
        let (profile, mut discrete) = parse_profile_and_discrete(table.clone(), array_rd)?;

        for col in ["calculated_dic", "calculated_pco2"] {
            if discrete.has_col(col) && discrete.all_missing(col) {
                discrete.drop_columns(&[col]);
            }
        }

        all_profile.append(profile);
        all_discrete.append(discrete);
    }

    Ok(SplitData {
        profile: all_profile,
        discrete: all_discrete,
    })
}
