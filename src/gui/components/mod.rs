// src/gui/components/mod.rs
pub mod season_panel;
pub mod export_bar;
pub mod data_table;
pub mod player_panel;
