// tests/config_file.rs
use std::fs;
use std::path::PathBuf;

use matchstats::config::consts::{DEFAULT_ENDPOINT, DEFAULT_OUT_DIR};
use matchstats::config::file::{load_from, save_to};
use matchstats::config::state::AppState;

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("matchstats_cfg_{}", name));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn save_load_round_trip() {
    let path = tmp_file("roundtrip");

    let mut state = AppState::default();
    state.options.endpoint = "http://localhost:9999/search".into();
    state.options.export.set_dir("exports");
    state.gui.window_w = 1280;
    state.gui.window_h = 800;

    save_to(&path, &state).unwrap();
    let back = load_from(&path);

    assert_eq!(back.options.endpoint, "http://localhost:9999/search");
    assert_eq!(back.options.export.out_dir(), PathBuf::from("exports"));
    assert_eq!(back.gui.window_w, 1280);
    assert_eq!(back.gui.window_h, 800);
}

#[test]
fn missing_file_yields_defaults() {
    let state = load_from(&tmp_file("missing"));

    assert_eq!(state.options.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(state.options.export.out_dir(), PathBuf::from(DEFAULT_OUT_DIR));
}

#[test]
fn unknown_keys_and_junk_are_ignored() {
    let path = tmp_file("junk");
    fs::write(
        &path,
        "# comment\n\
         shiny=true\n\
         not a key value line\n\
         window_w=nope\n\
         endpoint=http://example.test/api\n",
    )
    .unwrap();

    let state = load_from(&path);
    assert_eq!(state.options.endpoint, "http://example.test/api");
    // unparsable number keeps the default
    assert_eq!(state.gui.window_w, AppState::default().gui.window_w);
}

#[test]
fn empty_values_keep_defaults() {
    let path = tmp_file("empty_vals");
    fs::write(&path, "endpoint=\nout_dir=\n").unwrap();

    let state = load_from(&path);
    assert_eq!(state.options.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(state.options.export.out_dir(), PathBuf::from(DEFAULT_OUT_DIR));
}
