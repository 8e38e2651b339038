// src/gui/actions/export.rs
use crate::{error::Error, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set -> {}", app.state.options.export.display_path());
        app.out_path_dirty = false;
    }

    let msg = match file::export_selected(&app.state.options.export, app.session.selected()) {
        Ok(path) => format!("Exported to {}", path.display()),
        Err(Error::NothingToExport) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
