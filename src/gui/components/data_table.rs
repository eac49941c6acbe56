// src/gui/components/data_table.rs
//
// Draws the ranking table. Clicking a header sorts by that column (again to
// flip the order); clicking a name selects the player for the role panel.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::gui::app::App;
use crate::table::Column;

fn initial_width(col: Column) -> f32 {
    match col {
        Column::Name => 110.0,
        Column::Team => 110.0,
        Column::Position => 110.0,
        Column::AttackSuccessRatePct | Column::ReceptionSuccessPct => 120.0,
        _ => 90.0,
    }
}

/// Colour for rate columns: green at/above the scorer threshold, red below zero.
fn rate_color(col: Column, cell: &str) -> Option<egui::Color32> {
    if col != Column::AttackSuccessRatePct {
        return None;
    }
    let v: f64 = cell.parse().ok()?;
    if v >= crate::config::consts::HIGH_EFF_SUCCESS_PCT {
        Some(egui::Color32::from_rgb(0x4C, 0xAF, 0x50))
    } else if v < 0.0 {
        Some(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
    } else {
        None
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_none() {
        ui.centered_and_justified(|ui| {
            ui.label("Select a season on the left and press \"Load and analyse\".");
        });
        return;
    }

    if let Some(t) = app.table.as_ref() {
        ui.heading(format!("{}: overall efficiency ranking", t.season));
    }

    let columns = app.view.columns.clone();
    let sort_by = app.state.options.analysis.sort_by;
    let sort_order = app.state.options.analysis.sort_order;
    let selected = app.state.gui.selected_player.clone();

    let mut clicked_header: Option<Column> = None;
    let mut clicked_row: Option<usize> = None;

    {
        let view = &app.view;
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .max_scroll_height(f32::INFINITY);
        for &c in &columns {
            table = table.column(TableColumn::initial(initial_width(c)).resizable(true).clip(true).at_least(40.0));
        }

        table
            .header(24.0, |mut header| {
                for &c in &columns {
                    header.col(|ui| {
                        let mut text = s!(c.header());
                        if c == sort_by {
                            text.push(' ');
                            text.push_str(sort_order.arrow());
                        }
                        let resp = ui.add(
                            egui::Button::new(RichText::new(text).strong()).frame(false),
                        );
                        if resp.clicked() {
                            clicked_header = Some(c);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, view.nrows(), |mut row| {
                    let ri = row.index();
                    let Some(cells) = view.rows.get(ri) else { return };
                    for (ci, &c) in columns.iter().enumerate() {
                        let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            if c == Column::Name {
                                let is_sel = selected.as_deref() == Some(cell);
                                if ui.selectable_label(is_sel, cell).clicked() {
                                    clicked_row = Some(ri);
                                }
                            } else if c.is_numeric() {
                                let mut rt = RichText::new(cell);
                                if let Some(color) = rate_color(c, cell) {
                                    rt = rt.color(color);
                                }
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                            }
                        });
                    }
                });
            });
    }

    if let Some(c) = clicked_header {
        let a = &mut app.state.options.analysis;
        if a.sort_by == c {
            a.sort_order = a.sort_order.flip();
        } else {
            a.sort_by = c;
            // Text columns read best A→Z; numbers best-first.
            a.sort_order = if c.is_numeric() { crate::table::SortOrder::Descending } else { crate::table::SortOrder::Ascending };
        }
        logf!("UI: Sort → {:?} {:?}", a.sort_by, a.sort_order);
        app.rebuild_view();
    }

    if let Some(ri) = clicked_row {
        let name = app
            .view
            .record_ix
            .get(ri)
            .and_then(|&ix| app.table.as_ref().and_then(|t| t.records.get(ix)))
            .map(|r| s!(r.name()));
        if name.is_some() {
            logd!("UI: Selected player {:?}", name);
            app.state.gui.selected_player = name;
        }
    }
}
