//! Trade Screen - Perpetuals Trading Screen Mock-up
//!
//! A single phone-shaped window showing a BTC/USDT trading screen with a
//! decorative price chart. Nothing is fetched and nothing is traded.

mod config;
mod gui;
mod market;
mod selection;
mod series;

use anyhow::Context;
use config::{ScreenConfig, DEFAULT_CONFIG_FILE};
use eframe::egui;
use gui::TradeScreenApp;
use std::path::PathBuf;

/// Config from the path given as first argument, else `trade_screen.json` if present.
fn load_config() -> anyhow::Result<ScreenConfig> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let path = match explicit {
        Some(path) => path,
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(ScreenConfig::default());
            }
            path
        }
    };

    let config = ScreenConfig::load(&path)
        .with_context(|| format!("Could not load config from {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{:#}; using built-in screen", e);
        ScreenConfig::default()
    });

    // Configure native options
    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([360.0, 640.0])
            .with_title(&window.title),
        ..Default::default()
    };

    let title = window.title.clone();
    log::info!("Starting {}", title);

    // Run the application
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(TradeScreenApp::new(cc, config)))),
    )
}
