//! Voice dependency diagnostics.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use voxfile::config::Config;
use voxfile::voice::{check_availability, model_path};

pub fn check_command(work_dir: &Path, config_override: Option<&Path>) -> Result<()> {
    let config = match Config::load(work_dir, config_override) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {e:#}. Checking with defaults.");
            Config::default()
        }
    };

    let model = model_path(work_dir, &config.settings.voice.whisper_model);
    let (available, status) = check_availability(&model);
    println!("{status}");

    if !available {
        std::process::exit(1);
    }
    Ok(())
}
