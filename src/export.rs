// src/export.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv;
use crate::model::MatchResult;

/// Pretty-printed dump of the raw payload to `match-<query>.json`.
/// Not gated on a result being present: `None` writes the literal `null`.
pub fn write_json(
    export: &ExportOptions,
    query: &str,
    raw: Option<&Value>,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export_path(export, query, ExportFormat::Json.ext());
    ensure_directory(&export.out_dir())?;

    let text = serde_json::to_string_pretty(&raw)?;
    fs::write(&path, text)?;
    Ok(path)
}

/// Flattened rows to `match-<query>.csv`. A missing result is a no-op;
/// a present result with no teams still writes the header line.
pub fn write_csv(
    export: &ExportOptions,
    query: &str,
    stats: Option<&MatchResult>,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(stats) = stats else {
        return Ok(None);
    };

    let path = export_path(export, query, ExportFormat::Csv.ext());
    ensure_directory(&export.out_dir())?;

    fs::write(&path, csv::to_csv_string(stats))?;
    Ok(Some(path))
}

fn export_path(export: &ExportOptions, query: &str, ext: &str) -> PathBuf {
    let stem = sanitize_match_filename(query);
    export.out_dir().join(join!("match-", &stem, ".", ext))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Reduce a user-typed match id to something safe in a file name.
pub fn sanitize_match_filename(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut last_us = false;
    for ch in query.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("unnamed") } else { out }
}
