// src/gui/actions/export.rs
use crate::config::{self, options::ExportFormat};
use crate::export;
use crate::gui::app::App;

pub fn export(app: &mut App, format: ExportFormat) {
    // normalize out_dir first (mutates app) before any &app borrows
    if app.out_dir_dirty {
        app.state.options.export.set_dir(&app.out_dir_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.out_dir_dirty = false;
        config::file::save(&app.state);
    }

    let Some(hit) = app.result.as_ref() else {
        logd!("Export: Clicked, but there's no result");
        app.status("Nothing to export");
        return;
    };

    let opts = &app.state.options.export;
    let res = match format {
        ExportFormat::Json => export::write_json(opts, &app.last_query, Some(&hit.raw)).map(Some),
        ExportFormat::Csv => export::write_csv(opts, &app.last_query, Some(&hit.stats)),
    };

    match res {
        Ok(Some(path)) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Ok(None) => {
            logd!("Export: Nothing to write");
            app.status("Nothing to export");
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
