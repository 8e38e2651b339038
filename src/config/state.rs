// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Search,
    Awards,
    Compare,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Search, Tab::Awards, Tab::Compare];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Awards => "FY25 Awards",
            Tab::Compare => "Fuzzy Compare",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab
    pub current_tab: Tab,

    pub window_w: u32,
    pub window_h: u32,

    /// Search tab -> show keyword matches / record linkage under the selection
    pub show_matches: bool,
    pub show_linkage: bool,

    /// Compare tab text areas
    pub compare_left: String,
    pub compare_right: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Search,
            window_w: 1280,
            window_h: 800,
            show_matches: true,
            show_linkage: false,
            compare_left: s!(),
            compare_right: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
