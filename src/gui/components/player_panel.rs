// src/gui/components/player_panel.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::stats::PlayerRecord;

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong().size(18.0));
    });
}

fn body_line(rec: &PlayerRecord) -> String {
    let fmt = |v: Option<f64>, unit: &str| match v {
        Some(x) => format!("{x:.0} {unit}"),
        None => s!("–"),
    };
    format!("{} / {}", fmt(rec.height_cm(), "cm"), fmt(rec.weight_kg(), "kg"))
}

/// Single-player analysis: pick a name, see key metrics and the role label.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Player analysis");

    let Some(table) = app.table.clone() else {
        ui.label("Load a season to analyse individual players.");
        return;
    };
    if table.records.is_empty() {
        ui.label("No players in this season.");
        return;
    }

    let current = app.state.gui.selected_player.clone().unwrap_or_default();
    let mut picked = current.clone();
    egui::ComboBox::from_id_salt("player_pick")
        .width(220.0)
        .selected_text(if picked.is_empty() { "Select a player" } else { picked.as_str() })
        .show_ui(ui, |ui| {
            for name in table.names() {
                ui.selectable_value(&mut picked, s!(name), name);
            }
        });
    if picked != current {
        logd!("UI: Player → {}", picked);
        app.state.gui.selected_player = Some(picked);
    }

    let Some(rec) = app.selected_record() else {
        return;
    };
    let role = app.rules().classify(rec);

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        metric(ui, "Position", s!(rec.position().label()));
        ui.separator();
        metric(ui, "Height / weight", body_line(rec));
        ui.separator();
        metric(ui, "Net points / set", format!("{:.2}", rec.net_points_per_set));
        ui.separator();
        metric(ui, "Attack success", format!("{:.2}%", rec.attack_success_rate_pct));
        ui.separator();
        metric(ui, "Total points", rec.total_points.to_string());
    });

    ui.add_space(6.0);
    ui.label(RichText::new(format!("Role: {}", role.title())).strong());
    ui.label(role.narrative());
}
