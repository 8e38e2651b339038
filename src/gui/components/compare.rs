// src/gui/components/compare.rs
//
// Free-text fuzzy comparison: two text areas and four score bars.

use eframe::egui::{self, Color32};
use crate::{
    gui::app::App,
    matching::{FuzzyScores, ScoreBand},
};

fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Low => Color32::from_rgb(0xDC, 0x3C, 0x3C),
        ScoreBand::Medium => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        ScoreBand::High => Color32::from_rgb(0x3C, 0xB4, 0x50),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Fuzzy Text Matching");

    let gui = &mut app.state.gui;
    ui.columns(2, |cols| {
        cols[0].label("Text 1");
        cols[0].add(egui::TextEdit::multiline(&mut gui.compare_left).desired_rows(6));
        cols[1].label("Text 2");
        cols[1].add(egui::TextEdit::multiline(&mut gui.compare_right).desired_rows(6));
    });

    if ui.button("Compare").clicked() {
        if gui.compare_left.is_empty() || gui.compare_right.is_empty() {
            app.scores = None;
            app.status = s!("Please enter both text snippets.");
        } else {
            let scores = FuzzyScores::compare(&gui.compare_left, &gui.compare_right);
            logf!("Compare: {:?}", scores);
            app.scores = Some(scores);
        }
    }

    ui.label(format!("Status: {}", app.status));
    ui.add_space(8.0);

    if let Some(scores) = app.scores {
        egui::Grid::new("fuzzy_scores")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (i, (label, score)) in scores.labeled().into_iter().enumerate() {
                    let bar = egui::ProgressBar::new(f32::from(score) / 100.0)
                        .desired_width(260.0)
                        .fill(band_color(ScoreBand::of(score)))
                        .text(format!("{label}: {score}"));
                    ui.add(bar);
                    if i % 2 == 1 { ui.end_row(); }
                }
            });
    }
}
