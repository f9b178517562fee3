#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use eframe::egui;
use log::LevelFilter;

mod app;
mod config;
mod handlers;
mod logger;
#[cfg(feature = "thumbnails")]
mod pdfium;
mod shell;
mod state;
mod views;
mod worker;

use config::AppConfig;
use logger::AppLogger;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = AppLogger::new(config.log_capacity, level);
    logger
        .clone()
        .init()
        .context("Failed to install logger")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("pdf-merger-worker")
        .build()
        .context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    log::info!("Starting {}", config.title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.title)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let title = config.title;
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::PdfMergerApp::new(
                cc, handle, logger, config,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))?;

    runtime.shutdown_background();
    Ok(())
}
