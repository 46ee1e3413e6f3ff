// src/gui/components/team_grid.rs
//
// Renders the fetched match as team cards, two across, each with a small
// player table. Draws nothing while there is no result.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::model::Team;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(hit) = app.result.as_ref() else { return };

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (chunk_ix, pair) in hit.stats.teams.chunks(2).enumerate() {
            ui.columns(pair.len(), |cols| {
                for (i, team) in pair.iter().enumerate() {
                    cols[i].push_id((chunk_ix, i), |ui| card(ui, team));
                }
            });
            ui.add_space(8.0);
        }
    });
}

fn card(ui: &mut egui::Ui, team: &Team) {
    ui.group(|ui| {
        ui.heading(&team.name);

        if team.players.is_empty() {
            ui.label("No players");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .header(18.0, |mut header| {
                header.col(|ui| { ui.strong("Player"); });
                header.col(|ui| { ui.strong("Kills"); });
                header.col(|ui| { ui.strong("Damage"); });
            })
            .body(|mut body| {
                for player in &team.players {
                    body.row(16.0, |mut row| {
                        row.col(|ui| { ui.label(&player.name); });
                        row.col(|ui| { ui.label(player.kills.to_string()); });
                        row.col(|ui| { ui.label(player.damage.to_string()); });
                    });
                }
            });
    });
}
