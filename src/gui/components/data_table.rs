// src/gui/components/data_table.rs
//
// Table views. Purely views: the only state written back is the checkbox
// column of the results table (`app.checks`), which the app reconciles
// after the frame.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 20.0;
const TABLE_H: f32 = 260.0;

fn col_width(header: &str) -> f32 {
    // Long free-text columns get room; short codes stay narrow.
    if header.contains("Descrption") || header.contains("Title") { 320.0 } else { 120.0 }
}

fn scroll_style(ui: &mut egui::Ui) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;           // reserve space instead of overlaying content
    s.bar_width = 10.0;
    s.handle_min_length = 48.0;
    s.foreground_color = true;
}

fn header_label(ui: &mut egui::Ui, text: &str) {
    ui.scope(|ui| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
        });
    });
}

fn cell_label(ui: &mut egui::Ui, text: &str) {
    ui.scope(|ui| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
        ui.label(text).on_hover_text(text);
    });
}

/// Read-only table of `rows` under `headers`.
pub fn table<R: AsRef<[String]>>(ui: &mut egui::Ui, id: &str, headers: &[String], rows: &[R]) {
    scroll_style(ui);
    let mut t = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .max_scroll_height(TABLE_H)
        .cell_layout(Layout::left_to_right(Align::Center));
    for h in headers {
        t = t.column(Column::initial(col_width(h)).resizable(true).clip(true).at_least(20.0));
    }

    t.header(24.0, |mut header| {
        for h in headers {
            header.col(|ui| header_label(ui, h));
        }
    })
    .body(|body| {
        body.rows(ROW_H, rows.len(), |mut row| {
            let data = rows[row.index()].as_ref();
            for ci in 0..headers.len() {
                let cell = data.get(ci).map(String::as_str).unwrap_or("");
                row.col(|ui| cell_label(ui, cell));
            }
        });
    });
}

/// Current ResultSet with a leading checkbox column.
pub fn draw_results(ui: &mut egui::Ui, app: &mut App) {
    let Some(results) = app.session.results() else {
        ui.label("Enter a keyword or pick a filter, then Search.");
        return;
    };

    ui.strong(format!("Search results ({})", results.len()));
    if results.is_empty() {
        ui.label("No records found.");
        return;
    }

    let headers = results.headers();
    let checks = &mut app.checks;

    scroll_style(ui);
    let mut t = TableBuilder::new(ui)
        .id_salt(("results", results.id().get()))
        .striped(true)
        .max_scroll_height(TABLE_H)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(24.0));
    for h in headers {
        t = t.column(Column::initial(col_width(h)).resizable(true).clip(true).at_least(20.0));
    }

    t.header(24.0, |mut header| {
        header.col(|ui| header_label(ui, "Select"));
        for h in headers {
            header.col(|ui| header_label(ui, h));
        }
    })
    .body(|body| {
        body.rows(ROW_H, results.len(), |mut row| {
            let i = row.index();
            row.col(|ui| {
                if let Some(c) = checks.get_mut(i) {
                    ui.checkbox(c, "");
                }
            });
            let data = results.rows().get(i).map(Vec::as_slice).unwrap_or(&[]);
            for ci in 0..headers.len() {
                let cell = data.get(ci).map(String::as_str).unwrap_or("");
                row.col(|ui| cell_label(ui, cell));
            }
        });
    });
}

/// Running selection, across every search.
pub fn draw_selected(ui: &mut egui::Ui, app: &mut App) {
    let selected = app.session.selected();
    ui.strong(format!("Selected rows ({})", selected.len()));
    let Some(headers) = selected.headers() else {
        ui.label("Nothing selected yet.");
        return;
    };
    let rows: Vec<&[String]> = selected.rows().collect();
    table(ui, "selected_rows", headers, &rows);
}

/// Whole awards table.
pub fn draw_awards(ui: &mut egui::Ui, app: &mut App) {
    ui.strong("Fiscal Year 2025 NYC Government Procurement Awards");
    match app.session.awards() {
        Some(awards) => table(ui, "awards_table", awards.headers(), awards.rows()),
        None => {
            ui.label("No awards table loaded. Set data.awards in the config file.");
        }
    }
}
