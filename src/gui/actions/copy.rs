// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, export};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = super::export_table(app) else {
        app.status("Nothing to copy (load a season first)");
        logd!("Copy: Clicked, but no season is loaded");
        return;
    };
    if table.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let txt = export::to_export_text(&app.state.options.export, &table);
    logf!("Copy: rows={}, cols={}", table.nrows(), table.ncols());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
