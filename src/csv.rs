// src/csv.rs
use std::io::{self, Write};

use crate::model::MatchResult;

/// Fixed column set for the match export.
pub const HEADERS: [&str; 4] = ["Team", "Player", "Kills", "Damage"];

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Fields containing the separator,
/// quotes or line breaks are quoted with `""` escaping.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Row building ---------------- */

/// Flatten a match into one row per (team, player) pair, response order.
pub fn result_rows(stats: &MatchResult) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(stats.player_count());
    for team in &stats.teams {
        for player in &team.players {
            rows.push(vec![
                team.name.clone(),
                player.name.clone(),
                player.kills.to_string(),
                fmt_damage(player.damage),
            ]);
        }
    }
    rows
}

/// Integral damage prints without a trailing ".0"; fractional as-is.
fn fmt_damage(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Full CSV document: header line + one row per player.
pub fn to_csv_string(stats: &MatchResult) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &HEADERS);
    for row in result_rows(stats) {
        let _ = write_row(&mut buf, &row);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
