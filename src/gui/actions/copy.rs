// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(hit) = app.result.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no result");
        return;
    };

    let txt = csv::to_csv_string(&hit.stats);
    logf!(
        "Copy: query={:?} rows={}",
        app.last_query,
        hit.stats.player_count()
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
