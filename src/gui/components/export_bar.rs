// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers -> {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format -> {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.display_path();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("out/ or out/picks.csv"))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) -> {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / Clear / Link) ---
    ui.horizontal(|ui| {
        let n = app.session.selected().len();

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if ui.add_enabled(n > 0, egui::Button::new("Clear selections")).clicked() {
            actions::clear_selection(app);
        }
        if app.state.gui.show_linkage
            && ui
                .add_enabled(n > 0 && app.session.awards().is_some(), egui::Button::new("Link to awards"))
                .clicked()
        {
            actions::link(app);
        }

        ui.separator();
        ui.label(format!("Selected: {n}"));
        ui.label(format!("Status: {}", app.status));
    });
}
