// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::{ load, reload };

use crate::{gui::app::App, table::{ TableData, ALL_COLUMNS }};

/// Full-width table (every column, role included) in the on-screen order.
pub(super) fn export_table(app: &App) -> Option<TableData> {
    let t = app.table.as_ref()?;
    let a = &app.state.options.analysis;
    Some(TableData::build(&t.records, &app.rules(), &ALL_COLUMNS, a.sort_by, a.sort_order))
}
