// src/gui/components/matches.rs
//
// Cross-references under the selection: keyword matches (selected rows +
// award titles) and the last record-linkage run.

use eframe::egui;
use crate::gui::{app::App, components::data_table};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &app.state.gui;
    let keyword = app.session.filters().map(|f| f.keyword.trim()).unwrap_or("");

    if gui.show_matches && !keyword.is_empty() && !app.session.selected().is_empty() {
        ui.separator();
        ui.strong("Keyword Matches");

        let matches = app.session.keyword_matches(keyword);
        if matches.is_empty() {
            ui.label("No keyword matches found.");
        } else {
            let headers = vec![s!("Source"), s!("Matched text")];
            let rows: Vec<Vec<String>> = matches
                .iter()
                .map(|m| vec![m.origin.to_string(), m.text.clone()])
                .collect();
            data_table::table(ui, "keyword_matches", &headers, &rows);
        }
    }

    if gui.show_linkage && !app.linked.is_empty() {
        ui.separator();
        ui.strong(format!(
            "Record Linkage (Jaro-Winkler >= {:.2})",
            app.state.options.linkage.threshold
        ));
        let headers = vec![s!("Services Descrption"), s!("Title"), s!("Score")];
        let rows: Vec<Vec<String>> = app
            .linked
            .iter()
            .map(|p| vec![p.description.clone(), p.title.clone(), format!("{:.3}", p.score)])
            .collect();
        data_table::table(ui, "linkage", &headers, &rows);
    }
}
