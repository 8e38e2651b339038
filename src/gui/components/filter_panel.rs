// src/gui/components/filter_panel.rs
//
// Renders the left filter panel: keyword, one drop-down per filter column,
// and the Search / Reset Search buttons. Edits go to `app.draft`; nothing
// touches the session until "Search" is clicked.

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    search::FilterField,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    ui.label("Keyword");
    let kw = ui.add(
        egui::TextEdit::singleline(&mut app.draft.keyword)
            .hint_text("services description")
            .desired_width(220.0),
    );
    let enter = kw.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.separator();

    for field in FilterField::ALL {
        let column = field.column();
        let values = app.session.choices(column);

        let before = s!(app.draft.get(field).unwrap_or(""));
        let mut current = before.clone();
        ui.label(column);
        egui::ComboBox::from_id_salt(("filter", column))
            .width(220.0)
            .selected_text(if current.is_empty() { "(any)" } else { current.as_str() })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut current, s!(), "(any)");
                for v in values {
                    ui.selectable_value(&mut current, v.clone(), v.as_str());
                }
            });

        if current != before {
            logd!("UI: filter {} -> {:?}", column, current);
            app.draft.set(field, &current);
        }
    }

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Search").clicked() || enter {
            actions::search(app);
        }
        if ui.button("Reset Search").clicked() {
            actions::reset(app);
        }
    });

    ui.separator();

    let gui = &mut app.state.gui;
    if ui.checkbox(&mut gui.show_matches, "Show keyword matches").changed() {
        logf!("UI: show_matches -> {}", gui.show_matches);
    }
    if ui.checkbox(&mut gui.show_linkage, "Show record linkage").changed() {
        logf!("UI: show_linkage -> {}", gui.show_linkage);
    }
}
