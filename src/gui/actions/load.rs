// src/gui/actions/load.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    loader,
};

/// Load the selected season (cache first).
pub fn load(app: &mut App) {
    app.sync_source_into_options();
    let season = app.state.options.load.season.clone();
    let source = app.make_source();

    logf!("Load: Begin season={} source={}", season.id, app.state.options.load.source.describe());

    let mut prog = GuiProgress::new(app.status.clone());
    let res = loader::load_season(source.as_ref(), &season, &mut app.cache, Some(&mut prog));

    match res {
        Ok(table) => {
            let n = table.records.len();
            let dropped = table.unmatched.len();

            // Keep the analysed player if they exist in the new season.
            let keep = app.state.gui.selected_player
                .as_deref()
                .is_some_and(|name| table.find(name).is_some());
            if !keep {
                app.state.gui.selected_player = table.records.first().map(|r| s!(r.name()));
            }

            app.table = Some(table);
            app.rebuild_view();

            let mut msg = format!("Processed {} players for {}", n, season);
            if dropped > 0 {
                msg.push_str(&format!(" ({dropped} without a match in the other table)"));
            }
            if n == 0 {
                msg = format!("No player appears in both tables for {}", season.label);
            }
            app.status(msg);
        }
        Err(e) => {
            app.table = None;
            app.state.gui.selected_player = None;
            app.rebuild_view();
            app.status(format!("Could not load {}: {e}", season.label));
        }
    }
}

/// Drop the cached copy of the selected season, then load it again.
pub fn reload(app: &mut App) {
    let id = app.state.options.load.season.id.clone();
    if app.cache.invalidate(&id) {
        logd!("Cache: invalidated season {}", id);
    }
    load(app);
}
