// src/gui/actions/search.rs
use std::thread;

use eframe::egui;

use crate::gui::app::{App, SearchReply};
use crate::gui::progress::GuiProgress;
use crate::search;

pub fn search(app: &mut App, ctx: &egui::Context) {
    let query = app.query.clone(); // forwarded as-is, empty included
    let seq = app.seq.begin();

    app.running = true;
    app.error = None;
    app.result = None;

    logf!("Search: Begin seq={} query={:?}", seq, query);

    let endpoint = app.state.options.endpoint.clone();
    let tx = app.tx.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = search::run_search(&endpoint, &query, Some(&mut prog));
        let _ = tx.send(SearchReply { seq, query, outcome });
        ctx.request_repaint();
    });
}
