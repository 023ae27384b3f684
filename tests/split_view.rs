// tests/split_view.rs
//
// Area mapping, double-sensor coalescing and the profile/discrete split.
//
use cava_tools::split::{area_for_station, parse_profile_and_discrete, split_summaries};
use cava_tools::table::Table;

#[test]
fn area_mapping_matches_known_stations() {
    let cases = [
        ("Oregon Slope Base", "oregon-slope-base"),
        ("Slope Base PC01A", "oregon-slope-base"),
        ("Axial Base PN3A", "axial-base"),
        ("Axial Volcano International District", "axial-caldera"),
        ("Axial Caldera", "axial-caldera"),
        ("Southern Hydrate Ridge", "southern-hydrate-ridge"),
        ("Hydrate Ridge Summit", "southern-hydrate-ridge"),
        ("Mid Plate Node", "mid-plate"),
        ("Oregon Inshore", "oregon-inshore"),
        ("CE01ISSM", "oregon-inshore"),
        ("CE02SHSM", "oregon-shelf"),
        ("CE04OSSM", "oregon-offshore"),
        ("CE06ISSM", "washington-inshore"),
        ("CE07SHSM", "washington-shelf"),
        ("CE09OSSM", "washington-offshore"),
    ];
    for (station, area) in cases {
        assert_eq!(area_for_station(station).unwrap(), area, "{station}");
    }
}

#[test]
fn empty_station_maps_to_empty_area() {
    assert_eq!(area_for_station("").unwrap(), "");
    assert_eq!(area_for_station("   ").unwrap(), "");
}

#[test]
fn unknown_station_is_an_error() {
    assert!(area_for_station("Mariana Trench").is_err());
}

fn sample_table() -> Table {
    let mut t = Table::new(vec![
        "cruise",
        "station",
        "start_time",
        "ctd_pressure",
        "ctd_temperature_1",
        "ctd_temperature_2",
        "ctd_conductivity_1",
        "ctd_conductivity_2",
        "ctd_salinity_1",
        "ctd_salinity_2",
        "ctd_oxygen",
        "ctd_oxygen_flag",
        "ctd_file",
        "ctd_depth",
        "discrete_oxygen",
        "discrete_salinity",
        "calculated_dic",
        "calculated_pco2",
        "cruise_id",
    ]);
    t.push_row(vec![
        "TN326".into(),
        "Axial Base".into(),
        "2016-07-14T21:10:00".into(),
        "100.2".into(),
        "6.113".into(),
        "6.115".into(),
        "3.41".into(),
        "3.42".into(),
        "34.1".into(),
        "34.2".into(),
        "3.02".into(),
        "0b0001".into(),
        "cast1.hex".into(),
        "2915".into(),
        "3.25".into(),
        "34.05".into(),
        "".into(),
        "".into(),
        "TN326".into(),
    ]);
    t.push_row(vec![
        "TN326".into(),
        "Slope Base".into(),
        "2016-07-20T02:30:00".into(),
        "80.0".into(),
        "".into(),
        "7.221".into(),
        "".into(),
        "3.38".into(),
        "".into(),
        "33.9".into(),
        "2.88".into(),
        "0b0001".into(),
        "cast2.hex".into(),
        "2900".into(),
        "2.91".into(),
        "33.85".into(),
        "".into(),
        "".into(),
        "TN326".into(),
    ]);
    t
}

#[test]
fn coalesces_double_sensors() {
    let (profile, _) = parse_profile_and_discrete(sample_table(), "RS").unwrap();
    // sensor 1 preferred, sensor 2 as fallback
    assert_eq!(profile.get(0, "ctd_temperature"), Some("6.113"));
    assert_eq!(profile.get(1, "ctd_temperature"), Some("7.221"));
    assert_eq!(profile.get(1, "ctd_conductivity"), Some("3.38"));
    assert_eq!(profile.get(1, "ctd_salinity"), Some("33.9"));
    // the raw _1/_2 columns don't survive the split
    assert!(!profile.has_col("ctd_temperature_1"));
    assert!(!profile.has_col("ctd_temperature_2"));
}

#[test]
fn derives_date_and_area() {
    let (profile, discrete) = parse_profile_and_discrete(sample_table(), "RS").unwrap();
    assert_eq!(profile.get(0, "date"), Some("2016-07"));
    assert_eq!(profile.get(0, "area_rd"), Some("axial-base"));
    assert_eq!(profile.get(1, "area_rd"), Some("oregon-slope-base"));
    assert_eq!(discrete.get(0, "date"), Some("2016-07"));
    assert_eq!(discrete.get(0, "array_rd"), Some("RS"));
}

#[test]
fn profile_and_discrete_column_selection() {
    let (profile, discrete) = parse_profile_and_discrete(sample_table(), "RS").unwrap();

    // profile: ctd columns minus flags/files/depth, plus the keys
    assert!(profile.has_col("ctd_pressure"));
    assert!(profile.has_col("ctd_oxygen"));
    assert!(profile.has_col("cruise_id"));
    assert!(profile.has_col("array_rd"));
    assert!(!profile.has_col("ctd_oxygen_flag"));
    assert!(!profile.has_col("ctd_file"));
    assert!(!profile.has_col("ctd_depth"));
    assert!(!profile.has_col("discrete_oxygen"));
    assert!(!profile.has_col("station"));

    // discrete: sample measurements plus the keys
    assert!(discrete.has_col("ctd_pressure"));
    assert!(discrete.has_col("discrete_oxygen"));
    assert!(discrete.has_col("discrete_salinity"));
    assert!(discrete.has_col("calculated_dic"));
    assert!(discrete.has_col("cruise_id"));
    assert!(!discrete.has_col("ctd_oxygen"));
    assert!(!discrete.has_col("ctd_temperature"));
}

#[test]
fn split_drops_empty_calculated_columns() {
    let split = split_summaries(&[(s("RS"), sample_table())]).unwrap();
    // calculated_dic / calculated_pco2 are entirely missing in the sample
    assert!(!split.discrete.has_col("calculated_dic"));
    assert!(!split.discrete.has_col("calculated_pco2"));
    assert_eq!(split.profile.len(), 2);
    assert_eq!(split.discrete.len(), 2);
}

#[test]
fn split_concatenates_arrays() {
    let mut ce = sample_table();
    ce.map_column("station", |_| s("CE02SHSM"));
    ce.map_column("calculated_dic", |_| s("2010.5"));
    let split = split_summaries(&[(s("RS"), sample_table()), (s("CE"), ce)]).unwrap();
    assert_eq!(split.profile.len(), 4);
    let arrays: Vec<&str> = (0..split.discrete.len())
        .filter_map(|i| split.discrete.get(i, "array_rd"))
        .collect();
    assert_eq!(arrays, vec!["RS", "RS", "CE", "CE"]);
    // CE kept its calculated_dic values; RS rows are missing for it
    assert!(split.discrete.has_col("calculated_dic"));
    assert_eq!(split.discrete.get(0, "calculated_dic"), Some(""));
    assert_eq!(split.discrete.get(2, "calculated_dic"), Some("2010.5"));
}

fn s(v: &str) -> String {
    v.to_string()
}
