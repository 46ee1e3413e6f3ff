// src/gui/components/search_bar.rs
//
// Match id input + Search button + status line. Searches may overlap;
// arbitration happens in App::drain_replies.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Match ID:");

        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.query)
                .hint_text("Enter match ID")
                .desired_width(260.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Search").clicked() || submitted {
            actions::search(app, ui.ctx());
        }

        if app.running {
            ui.spinner();
            ui.label("Loading...");
        }
    });

    ui.label(app.status_line());
    ui.add_space(4.0);
}
