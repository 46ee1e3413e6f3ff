// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // export controls only make sense once a result is in
    if app.result.is_none() {
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.out_dir_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(220.0),
            )
            .changed()
        {
            app.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }

        if ui.button("Export JSON").clicked() {
            actions::export(app, ExportFormat::Json);
        }
        if ui.button("Export CSV").clicked() {
            actions::export(app, ExportFormat::Csv);
        }
        if ui.button("Copy CSV").clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    ui.separator();
}
