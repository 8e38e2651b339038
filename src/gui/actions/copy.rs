// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

/// Selected rows to the clipboard, formatted like an export.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let selected = app.session.selected();
    if selected.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = to_export_string(
        selected.headers(),
        selected.rows(),
        export.include_headers,
        export.format.delim(),
    );
    let n = selected.len();
    logf!("Copy: rows={}, format={:?}", n, export.format);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {n} row(s) to clipboard"));
}
