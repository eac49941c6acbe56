// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cache;
pub mod config;
pub mod csv;
pub mod export;
pub mod gui;
pub mod loader;
pub mod progress;
pub mod season;
pub mod source;
pub mod stats;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
