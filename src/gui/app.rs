// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    cache::SeasonCache,
    config::{
        options::SourceKind,
        state::AppState,
    },
    loader::SeasonTable,
    season::Season,
    source::{ CsvDirSource, SampleSource, SeasonSource },
    stats::{ PlayerRecord, RoleRules },
    table::{ TableData, DISPLAY_COLUMNS },
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Enterprise Volleyball League · Men's Efficiency Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub seasons: Vec<Season>,

    // computed seasons, keyed on (season, source version)
    pub cache: SeasonCache,

    // season currently on screen + its rendered ranking table
    pub table: Option<Arc<SeasonTable>>,
    pub view: TableData,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let seasons = Season::catalogue();
        if let Some(s) = seasons.get(state.gui.season_index) {
            state.options.load.season = s.clone();
        }
        state.options.export.set_default_for_season(&state.options.load.season);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: seasons={}, default season={}", seasons.len(), state.options.load.season.id);

        Self {
            state,
            seasons,
            cache: SeasonCache::default(),
            table: None,
            view: TableData::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Pick a season and press Load"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn rules(&self) -> RoleRules {
        RoleRules::for_options(self.state.options.analysis.serving_threat)
    }

    /// Mirror the side panel's source controls into load options.
    pub fn sync_source_into_options(&mut self) {
        let gui = &self.state.gui;
        self.state.options.load.source = if gui.use_csv_source {
            SourceKind::CsvDir(PathBuf::from(gui.data_dir_text.trim()))
        } else {
            SourceKind::Sample
        };
    }

    pub fn make_source(&self) -> Box<dyn SeasonSource> {
        match &self.state.options.load.source {
            SourceKind::Sample => Box::new(SampleSource),
            SourceKind::CsvDir(dir) => Box::new(CsvDirSource::new(dir.clone())),
        }
    }

    /// Re-render the ranking table after data, sort or rule changes.
    pub fn rebuild_view(&mut self) {
        let a = &self.state.options.analysis;
        self.view = match &self.table {
            Some(t) => TableData::build(&t.records, &self.rules(), &DISPLAY_COLUMNS, a.sort_by, a.sort_order),
            None => TableData::default(),
        };
    }

    pub fn selected_record(&self) -> Option<&PlayerRecord> {
        let name = self.state.gui.selected_player.as_deref()?;
        self.table.as_ref()?.find(name)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("season")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::season_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("player")
            .resizable(true)
            .min_height(150.0)
            .show(ctx, |ui| {
                crate::gui::components::player_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.status_text());

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
