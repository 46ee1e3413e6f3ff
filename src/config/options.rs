// src/config/options.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_ENDPOINT, DEFAULT_OUT_DIR};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Json => "json", ExportFormat::Csv => "csv" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    /// Directory the `match-<id>.<ext>` files land in.
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone()
    }

    /// Parse user text into the output directory. Empty input keeps the
    /// current value.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(s);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Search endpoint; overridable via config file or --endpoint.
    pub endpoint: String,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(DEFAULT_ENDPOINT),
            export: ExportOptions::default(),
        }
    }
}
