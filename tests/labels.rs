// tests/labels.rs
//
// Column label parsing: unit splitting, typo repair, snake-casing.
//
use cava_tools::labels::{check_name, parse_label, parse_labels};

#[test]
fn splits_name_and_unit() {
    let l = parse_label("CTD Temperature 1 [deg C]").unwrap();
    assert_eq!(l.name, "ctd_temperature_1");
    assert_eq!(l.display_name, "CTD Temperature 1");
    assert_eq!(l.unit.as_deref(), Some("deg C"));
}

#[test]
fn unit_is_optional() {
    let l = parse_label("CTD pH").unwrap();
    assert_eq!(l.name, "ctd_ph");
    assert_eq!(l.display_name, "CTD pH");
    assert_eq!(l.unit, None);
}

#[test]
fn unit_with_special_characters() {
    let l = parse_label("CTD Fluorescence [mg/m^3]").unwrap();
    assert_eq!(l.name, "ctd_fluorescence");
    assert_eq!(l.unit.as_deref(), Some("mg/m^3"));
}

#[test]
fn fixes_misspelled_fluorescence() {
    assert_eq!(
        check_name("CTD Fluorescense [mg/m^3]"),
        "CTD Fluorescence [mg/m^3]"
    );
    assert_eq!(check_name("CTD Flourescence"), "CTD Fluorescence");
    let l = parse_label("CTD Fluorescense [mg/m^3]").unwrap();
    assert_eq!(l.name, "ctd_fluorescence");
}

#[test]
fn fixes_start_positioning() {
    assert_eq!(
        check_name("Bottom Depth at Start Positioning [m]"),
        "Bottom Depth at Start Position"
    );
}

#[test]
fn fixes_fused_ph_analysis() {
    let l = parse_label("Discrete pHAnalysis Temp [deg C]").unwrap();
    assert_eq!(l.display_name, "Discrete pH Analysis Temp");
    assert_eq!(l.name, "discrete_ph_analysis_temp");
}

#[test]
fn parses_header_row() {
    let headers = ["Cruise", "Station", "Start Time [UTC]", "CTD Pressure [db]"];
    let labels = parse_labels(&headers);
    let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["cruise", "station", "start_time", "ctd_pressure"]);
}
