//! Initialize a .voxfile/config.toml configuration file.

use std::path::Path;

use anyhow::{Context, Result};

use voxfile::config::Config;

pub fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_dir = work_dir.join(".voxfile");
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let content = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    Ok(())
}
