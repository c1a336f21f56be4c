#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod context;
mod dialog;
mod helpers;
mod panels;
mod paths;
mod theme;

use reactor_core::helpers::scale::{BASE_HEIGHT, BASE_WIDTH};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eframe::Result {
    ffmpeg_the_third::init().expect("FFmpeg init failed");
    reactor_log!("[app] start");

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("Reactor Plus")
            .with_inner_size([BASE_WIDTH, BASE_HEIGHT])
            .with_min_inner_size([BASE_WIDTH / 4.0, BASE_HEIGHT / 4.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Reactor Plus",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ReactorApp::new(cc)))),
    )
}
