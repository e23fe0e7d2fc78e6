//! GUI runner - launches the voxfile window.

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use crate::config::Config;

use super::app::VoxfileApp;

/// Run the main GUI application
pub fn run_gui(work_dir: PathBuf, config_override: Option<PathBuf>) -> Result<()> {
    let work_dir = if work_dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        work_dir
    };

    let config = match Config::load(&work_dir, config_override.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {e:#}. Falling back to defaults.");
            Config::default()
        }
    };

    info!("Starting voxfile GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = VoxfileApp::new(work_dir, config)?;

    eframe::run_native("voxfile", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {e}"))?;

    Ok(())
}
