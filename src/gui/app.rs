// src/gui/app.rs
use std::error::Error;
use std::sync::{Arc, Mutex, mpsc};
use std::time::Duration;

use eframe::egui;

use crate::config::{self, state::AppState};
use crate::net::FetchError;
use crate::search::{SearchHit, SearchSeq};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Match Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Reply from a search worker, tagged with its sequence number.
pub struct SearchReply {
    pub seq: u64,
    pub query: String,
    pub outcome: Result<SearchHit, FetchError>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // view state
    pub query: String,
    /// The query `result` answers; names the export files.
    pub last_query: String,
    pub result: Option<SearchHit>,
    pub error: Option<String>,
    pub running: bool,

    // overlapping-search arbitration
    pub seq: SearchSeq,

    // output dir field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // worker replies
    pub tx: mpsc::Sender<SearchReply>,
    rx: mpsc::Receiver<SearchReply>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        logf!("Init: endpoint={}", state.options.endpoint);

        Self {
            state,
            query: s!(),
            last_query: s!(),
            result: None,
            error: None,
            running: false,
            seq: SearchSeq::default(),
            out_dir_text,
            out_dir_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            tx,
            rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn status_line(&self) -> String {
        self.status.lock().unwrap().clone()
    }

    /// Apply finished workers. Replies from searches that were superseded
    /// by a later one are dropped here.
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.rx.try_recv() {
            if !self.seq.is_current(reply.seq) {
                logd!(
                    "Search: Dropped stale reply seq={} query={:?}",
                    reply.seq,
                    reply.query
                );
                continue;
            }
            self.running = false;
            match reply.outcome {
                Ok(hit) => {
                    self.status(format!(
                        "{} team(s), {} player(s)",
                        hit.stats.team_count(),
                        hit.stats.player_count()
                    ));
                    self.error = None;
                    self.last_query = reply.query;
                    self.result = Some(hit);
                }
                Err(e) => {
                    loge!("Search: Error query={:?}: {}", reply.query, e);
                    self.result = None;
                    self.error = Some(e.to_string());
                    self.status("Idle");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_replies();
        if self.running {
            // keep polling for the worker reply
            ctx.request_repaint_after(Duration::from_millis(150));
        }

        // remember the window size for the next start
        let rect = ctx.screen_rect();
        self.state.gui.window_w = rect.width() as u32;
        self.state.gui.window_h = rect.height() as u32;

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = self.error.clone() {
                ui.colored_label(egui::Color32::RED, err);
                ui.separator();
            }

            crate::gui::components::export_bar::draw(ui, self);

            crate::gui::components::team_grid::draw(ui, self);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        config::file::save(&self.state);
    }
}
