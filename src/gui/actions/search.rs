// src/gui/actions/search.rs
use crate::{error::Error, gui::app::App};

/// Commit the filter panel and run the search.
pub fn search(app: &mut App) {
    let filters = app.draft.clone();
    let msg = match app.session.search(&filters) {
        Ok(rs) => {
            logf!("Search: {} -> {} rows", rs.id(), rs.len());
            if rs.is_empty() { s!("No records found") } else { format!("Found {} row(s)", rs.len()) }
        }
        Err(Error::NoFilters) => {
            logd!("Search: Clicked with no filters");
            s!("Please enter a keyword or select at least one filter.")
        }
        Err(e) => {
            loge!("Search: Error: {}", e);
            format!("Search error: {e}")
        }
    };
    app.sync_checks();
    app.status(msg);
}

/// "Reset Search": filters, results and every selection.
pub fn reset(app: &mut App) {
    app.session.reset();
    app.draft.clear();
    app.linked.clear();
    app.sync_checks();
    app.status("Search reset");
}

pub fn clear_selection(app: &mut App) {
    app.session.clear_selection();
    app.checks.iter_mut().for_each(|c| *c = false);
    app.linked.clear();
    app.status("Selections cleared");
}

/// Record linkage of the selection against award titles.
pub fn link(app: &mut App) {
    match app.session.link(&app.state.options.linkage) {
        Ok(pairs) => {
            let msg = format!("Linked {} pair(s)", pairs.len());
            app.linked = pairs;
            app.status(msg);
        }
        Err(e) => {
            loge!("Linkage: Error: {}", e);
            app.linked.clear();
            app.status(format!("Linkage error: {e}"));
        }
    }
}
