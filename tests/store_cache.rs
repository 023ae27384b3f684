// tests/store_cache.rs
//
// Round-trip through the on-disk dataset cache.
//
use cava_tools::store::{load_table_in, save_table_in, DatasetKind};
use cava_tools::table::Table;

fn contents() -> Table {
    let mut t = Table::new(vec!["name", "description", "modified"]);
    t.push_row(vec![
        "TN326_Discrete_Summary.csv".into(),
        "summary, latest revision".into(), // delimiter inside a cell
        "2020-03-03T16:44:00".into(),
    ]);
    t.push_row(vec![
        "TN326_README.pdf".into(),
        "".into(),
        "2019-10-14T10:20:00".into(),
    ]);
    t
}

#[test]
fn round_trip_preserves_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = contents();

    let path = save_table_in(dir.path(), DatasetKind::Contents, &table).unwrap();
    assert!(path.ends_with("contents.csv"));

    let loaded = load_table_in(dir.path(), DatasetKind::Contents).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn dataset_kinds_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let table = contents();

    save_table_in(dir.path(), DatasetKind::Profile, &table).unwrap();
    save_table_in(dir.path(), DatasetKind::Discrete, &Table::new(vec!["cruise_id"])).unwrap();

    let profile = load_table_in(dir.path(), DatasetKind::Profile).unwrap();
    assert_eq!(profile.len(), 2);
    let discrete = load_table_in(dir.path(), DatasetKind::Discrete).unwrap();
    assert!(discrete.is_empty());
    assert_eq!(discrete.columns, vec!["cruise_id"]);
}

#[test]
fn missing_cache_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_table_in(dir.path(), DatasetKind::Contents).is_none());
}
