// src/config/file.rs
//
// Plain key=value config file in the app dir. Unknown keys are ignored;
// a missing or unreadable file falls back to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::consts::{APP_DIR, CONFIG_FILE};
use super::state::AppState;

pub fn config_path() -> PathBuf {
    PathBuf::from(APP_DIR).join(CONFIG_FILE)
}

pub fn load() -> AppState {
    load_from(&config_path())
}

pub fn save(state: &AppState) {
    if let Err(e) = save_to(&config_path(), state) {
        loge!("Config: Save failed: {}", e);
    }
}

pub fn load_from(path: &Path) -> AppState {
    let mut state = AppState::default();
    let Ok(text) = fs::read_to_string(path) else {
        return state;
    };

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "endpoint" if !val.is_empty() => state.options.endpoint = s!(val),
            "out_dir" => state.options.export.set_dir(val),
            "window_w" => if let Ok(v) = val.parse() { state.gui.window_w = v },
            "window_h" => if let Ok(v) = val.parse() { state.gui.window_h = v },
            _ => {}
        }
    }
    state
}

pub fn save_to(path: &Path, state: &AppState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut text = String::new();
    text.push_str(&format!("endpoint={}\n", state.options.endpoint));
    text.push_str(&format!(
        "out_dir={}\n",
        state.options.export.out_dir().display()
    ));
    text.push_str(&format!("window_w={}\n", state.gui.window_w));
    text.push_str(&format!("window_h={}\n", state.gui.window_h));
    fs::write(path, text)
}
