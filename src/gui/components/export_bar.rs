// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
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
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
