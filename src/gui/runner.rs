//! GUI runner - launches the salesdeck dashboard window

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

use super::app::DashboardApp;
use crate::config::Config;

/// Run the dashboard GUI
pub fn run_gui(config: Config, mapping_path: Option<PathBuf>) -> Result<()> {
    let width = config.settings.gui.window_width;
    let height = config.settings.gui.window_height;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([720.0, 420.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = DashboardApp::new(config, mapping_path);
    info!("[salesdeck] Starting GUI");

    eframe::run_native("salesdeck", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
