// src/gui/actions/export.rs
use crate::{gui::app::App, export::write_export};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = match super::export_table(app) {
        None => {
            logd!("Export: Clicked, but no season is loaded");
            s!("Nothing to export (load a season first)")
        }
        Some(table) if table.is_empty() => s!("Nothing to export"),
        Some(table) => match write_export(&app.state.options.export, &table) {
            Ok(path) => format!("Exported {} players → {}", table.nrows(), path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    app.status(status_msg);
}
