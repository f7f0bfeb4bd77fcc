use glyph_games::frameworks::store::FileSettings;
use glyph_games::interface_adapters::settings::{SettingsStore, sensitivity};

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSettings::open(dir.path().join("settings.json"));
    assert_eq!(store.get_f32(sensitivity::KEY), None);
    assert_eq!(sensitivity::get(&store), sensitivity::DEFAULT);
}

#[test]
fn values_round_trip_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    let store = FileSettings::open(path.clone());
    sensitivity::set(&store, 0.7);
    assert_eq!(sensitivity::get(&store), 0.7);

    // A fresh instance reads what the first one persisted.
    let reopened = FileSettings::open(path);
    assert_eq!(sensitivity::get(&reopened), 0.7);
}

#[test]
fn sensitivity_is_clamped_on_both_read_and_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSettings::open(dir.path().join("settings.json"));

    // Writes clamp into range.
    sensitivity::set(&store, 5.0);
    assert_eq!(store.get_f32(sensitivity::KEY), Some(1.0));

    // Reads clamp values planted out of range by other writers.
    store.set_f32(sensitivity::KEY, -3.0);
    assert_eq!(sensitivity::get(&store), sensitivity::MIN);
}

#[test]
fn corrupt_files_start_empty_instead_of_failing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json at all").expect("write corrupt file");

    let store = FileSettings::open(path);
    assert_eq!(sensitivity::get(&store), sensitivity::DEFAULT);
}
