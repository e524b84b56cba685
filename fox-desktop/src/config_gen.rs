use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use fox_core::config::{GameConfig, SystemConfig};
use fox_skia_renderer::config::WindowConfig;

#[derive(Serialize, Default)]
pub struct FullConfig {
    pub system: SystemConfig,
    pub window: WindowConfig,
    pub game: GameConfig,
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&FullConfig::default()).context("Failed to serialize default config")
}

/// Writes a default `config.toml` unless one is already there.
pub fn ensure_config_exists(path: &str) -> Result<()> {
    if Path::new(path).exists() {
        return Ok(());
    }

    println!("Creating default configuration at '{}'...", path);
    let toml_str = default_config_toml()?;
    fs::write(path, toml_str).with_context(|| format!("Failed to write config file '{}'", path))?;
    println!("Config file created successfully.");
    Ok(())
}
