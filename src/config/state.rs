// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Index into `Season::catalogue()` shown in the side panel
    pub season_index: usize,

    /// Player shown in the role analysis panel
    pub selected_player: Option<String>,

    /// Text of the CSV data directory field
    pub data_dir_text: String,
    pub use_csv_source: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            season_index: super::consts::DEFAULT_SEASON_INDEX,
            selected_player: None,
            data_dir_text: s!(super::consts::DEFAULT_DATA_DIR),
            use_csv_source: false,
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
