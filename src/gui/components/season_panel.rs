// src/gui/components/season_panel.rs
//
// Left panel: season picker, data source, load/reload, rule toggle.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Season");
    ui.label(egui::RichText::new("Target division: Men").weak());

    ui.separator();

    // --- Season picker ---
    let prev = app.state.gui.season_index;
    let mut idx = prev;
    let current_label = app.seasons.get(idx).map(|s| s.label.clone()).unwrap_or_default();
    egui::ComboBox::from_id_salt("season_combo")
        .selected_text(current_label)
        .width(240.0)
        .show_ui(ui, |ui| {
            for (i, s) in app.seasons.iter().enumerate() {
                ui.selectable_value(&mut idx, i, s.label.as_str());
            }
        });

    if idx != prev {
        if let Some(season) = app.seasons.get(idx).cloned() {
            logf!("UI: Season {} → {}", app.state.options.load.season.id, season.id);
            let export = &mut app.state.options.export;
            // Follow the season in the output name unless the user typed one.
            if !app.out_path_dirty && export.is_default_for(&app.state.options.load.season) {
                export.set_default_for_season(&season);
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            app.state.gui.season_index = idx;
            app.state.options.load.season = season;
        }
    }

    ui.add_space(6.0);

    // --- Data source ---
    ui.label("Data source:");
    ui.radio_value(&mut app.state.gui.use_csv_source, false, "Sample rows");
    ui.radio_value(&mut app.state.gui.use_csv_source, true, "CSV folder");
    ui.add_enabled(
        app.state.gui.use_csv_source,
        egui::TextEdit::singleline(&mut app.state.gui.data_dir_text)
            .hint_text("data")
            .font(egui::TextStyle::Monospace),
    );

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.button("Load and analyse").clicked() {
            actions::load(app);
        }
        if ui.button("Reload").on_hover_text("Ignore the cached copy").clicked() {
            actions::reload(app);
        }
    });

    ui.separator();

    // --- Rules ---
    ui.label("Role rules:");
    let before = app.state.options.analysis.serving_threat;
    ui.checkbox(&mut app.state.options.analysis.serving_threat, "Serving-threat branch");
    if app.state.options.analysis.serving_threat != before {
        logf!("UI: serving_threat → {}", app.state.options.analysis.serving_threat);
        app.rebuild_view();
    }

    // --- Unmatched names ---
    let unmatched: Vec<String> = app
        .table
        .as_ref()
        .map(|t| t.unmatched.iter().map(|u| format!("{} ({} only)", u.name, u.side)).collect())
        .unwrap_or_default();
    if !unmatched.is_empty() {
        ui.separator();
        ui.collapsing(format!("Not merged ({})", unmatched.len()), |ui| {
            for line in &unmatched {
                ui.label(line);
            }
        });
    }
}
