// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use vleague_stats::{ config::{ consts::LOG_FILE, state::GuiState }, gui, log };

/// Volleyball-ish window icon: a white ball with two seams on league blue.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let c = (N as f32 - 1.0) / 2.0;
    let r = c - 2.0;
    let img = image::RgbaImage::from_fn(N, N, |x, y| {
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            image::Rgba([0x1F, 0x3A, 0x68, 0xFF])
        } else if (dx - dy * 0.6).abs() < 2.0 || (dy + (dx * 0.08).powi(2) - 6.0).abs() < 1.6 {
            image::Rgba([0xF2, 0xB1, 0x34, 0xFF])
        } else {
            image::Rgba([0xFA, 0xFA, 0xFA, 0xFF])
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    log::init(LOG_FILE, log::Level::Debug);

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gs.window_w as f32, gs.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
