// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::AppOptions,
        state::{AppState, Tab},
    },
    data::ResultSetId,
    matching::FuzzyScores,
    search::SearchFilters,
    selection::SelectionSnapshot,
    session::{LinkedPair, Session},
    store::Table,
};

use super::components;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NYC Procurement",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(options))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    // filter panel widgets; committed to the session on "Search"
    pub draft: SearchFilters,

    // checkbox column for the ResultSet in `shown`
    pub checks: Vec<bool>,
    pub shown: Option<ResultSetId>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,

    // last computed linkage / fuzzy scores
    pub linked: Vec<LinkedPair>,
    pub scores: Option<FuzzyScores>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (session, status) = match Session::open(&state.options.data) {
            Ok(s) => {
                let msg = format!("Loaded {} rows", s.source().rows().len());
                (s, msg)
            }
            Err(e) => {
                loge!("Init: {}", e);
                let empty = Table::new(&state.options.data.procurement_table, Vec::new(), Vec::new());
                (Session::new(Box::new(empty)), format!("No data: {e}"))
            }
        };

        let out_path_text = state.options.export.display_path();
        logf!(
            "Init: awards={}, tab={:?}",
            session.awards().is_some(),
            state.gui.current_tab
        );

        Self {
            state,
            session,
            draft: SearchFilters::new(),
            checks: Vec::new(),
            shown: None,
            out_path_text,
            out_path_dirty: false,
            status,
            linked: Vec::new(),
            scores: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Resize the checkbox column when the session's ResultSet changed.
    /// Positions already held for that ResultSet come back checked.
    pub fn sync_checks(&mut self) {
        let current = self.session.results().map(|rs| (rs.id(), rs.len()));
        let id = current.map(|(id, _)| id);
        if id == self.shown { return; }

        self.checks = match current {
            Some((id, len)) => {
                let mut checks = vec![false; len];
                for p in self.session.selected().positions_for(id).iter() {
                    if let Some(slot) = checks.get_mut(p) { *slot = true; }
                }
                checks
            }
            None => Vec::new(),
        };
        self.shown = id;
        logd!("UI: checks reset for {:?} ({} rows)", id, self.checks.len());
    }

    /// Feed this frame's checkbox state to the reconciler.
    pub fn reconcile_checks(&mut self) {
        if self.shown.is_none() { return; }
        let outcome = self.session.reconcile(SelectionSnapshot::from_checks(&self.checks));
        if !outcome.is_noop() {
            let n = self.session.selected().len();
            self.status(format!("Selected: {n} row(s)"));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_checks();

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.current_tab {
                Tab::Search => {
                    components::export_bar::draw(ui, self);
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .id_salt("search_tab_scroll")
                        .show(ui, |ui| {
                            components::data_table::draw_results(ui, self);
                            ui.separator();
                            components::data_table::draw_selected(ui, self);
                            components::matches::draw(ui, self);
                        });
                }
                Tab::Awards => components::data_table::draw_awards(ui, self),
                Tab::Compare => components::compare::draw(ui, self),
            }
        });

        self.reconcile_checks();
    }
}
