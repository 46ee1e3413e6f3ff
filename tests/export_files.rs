// tests/export_files.rs
use std::fs;
use std::path::{Path, PathBuf};

use matchstats::config::options::ExportOptions;
use matchstats::csv;
use matchstats::export::{sanitize_match_filename, write_csv, write_json};
use matchstats::model::{MatchResult, Player, Team};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("matchstats_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn export_into(dir: &Path) -> ExportOptions {
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());
    opts
}

fn player(name: &str, kills: u64, damage: f64) -> Player {
    Player { name: name.into(), kills, damage }
}

fn sample() -> MatchResult {
    MatchResult {
        teams: vec![
            Team {
                name: "Alpha".into(),
                players: vec![player("p1", 7, 1043.0), player("p2", 0, 12.5)],
            },
            Team {
                name: "Beta".into(),
                players: vec![player("p3", 3, 512.0)],
            },
        ],
    }
}

#[test]
fn csv_has_header_plus_one_row_per_player() {
    let stats = sample();
    let doc = csv::to_csv_string(&stats);
    let lines: Vec<&str> = doc.lines().collect();

    assert_eq!(lines.len(), 1 + stats.player_count());
    assert_eq!(lines[0], "Team,Player,Kills,Damage");
    // rows keep the (team, player) response order
    assert_eq!(lines[1], "Alpha,p1,7,1043");
    assert_eq!(lines[2], "Alpha,p2,0,12.5");
    assert_eq!(lines[3], "Beta,p3,3,512");
}

#[test]
fn csv_quotes_embedded_commas_and_quotes() {
    let stats = MatchResult {
        teams: vec![Team {
            name: r#"Alpha, the "Great""#.into(),
            players: vec![player("a,b", 1, 2.0)],
        }],
    };
    let doc = csv::to_csv_string(&stats);
    let lines: Vec<&str> = doc.lines().collect();

    assert_eq!(lines[1], r#""Alpha, the ""Great""","a,b",1,2"#);
}

#[test]
fn csv_export_writes_file_named_after_query() {
    let dir = tmp_dir("csv_named");
    let opts = export_into(&dir);

    let path = write_csv(&opts, "m 12/34", Some(&sample())).unwrap().unwrap();
    assert_eq!(path, dir.join("match-m_1234.csv"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Team,Player,Kills,Damage"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn csv_export_without_result_is_a_noop() {
    let dir = tmp_dir("csv_noop");
    let opts = export_into(&dir);

    assert!(write_csv(&opts, "m-1", None).unwrap().is_none());
    assert!(!dir.join("match-m-1.csv").exists());
}

#[test]
fn csv_export_with_no_teams_still_writes_the_header() {
    let dir = tmp_dir("csv_empty");
    let opts = export_into(&dir);
    let stats = MatchResult { teams: Vec::new() };

    let path = write_csv(&opts, "m-1", Some(&stats)).unwrap().unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "Team,Player,Kills,Damage\n");
}

#[test]
fn json_export_round_trips_the_raw_payload() {
    let dir = tmp_dir("json_roundtrip");
    let opts = export_into(&dir);

    // extra fields the typed model doesn't know about must survive
    let raw: serde_json::Value =
        serde_json::from_str(r#"{"teams":[],"mode":"ranked","extra":[1,2]}"#).unwrap();
    let path = write_json(&opts, "m-9", Some(&raw)).unwrap();
    assert_eq!(path, dir.join("match-m-9.json"));

    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn json_export_without_result_writes_null() {
    let dir = tmp_dir("json_null");
    let opts = export_into(&dir);

    let path = write_json(&opts, "m-1", None).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "null");
}

#[test]
fn json_export_creates_the_output_directory() {
    let dir = tmp_dir("json_mkdir").join("nested");
    let opts = export_into(&dir);

    let path = write_json(&opts, "m-1", None).unwrap();
    assert!(path.exists());
}

#[test]
fn filename_sanitizing() {
    assert_eq!(sanitize_match_filename("abc-123"), "abc-123");
    assert_eq!(sanitize_match_filename("a  b"), "a_b");
    assert_eq!(sanitize_match_filename("../../etc"), "etc");
    assert_eq!(sanitize_match_filename(""), "unnamed");
}
