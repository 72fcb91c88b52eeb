//! mdpad - a single-document markdown editor
//!
//! Editor on the left, rendered preview on the right, and a File menu for
//! opening and saving `.md`/`.markdown` files.

mod app;
mod core;
mod ui;

use app::{MarkdownApp, WINDOW_TITLE};
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting mdpad...");

    let config = AppConfig::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(WINDOW_TITLE),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "mdpad",
        native_options,
        Box::new(|_cc| Ok(Box::new(MarkdownApp::new(config)))),
    )
}
