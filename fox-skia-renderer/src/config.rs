use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fox_ui::FONT_FAMILIES;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub assets_path: String,
    /// Font family → file stem under `assets_path`.
    pub fonts: BTreeMap<String, String>,
}

/// File stems of the fonts the game ships with, in `FONT_FAMILIES` order.
const DEFAULT_FONT_FILES: [&str; 9] = [
    "font_regular",
    "font_light",
    "font_bold",
    "font_oblique",
    "font_light_oblique",
    "font_bold_oblique",
    "font_small_caps",
    "font_small_caps_light",
    "font_small_caps_bold",
];

impl Default for AssetsConfig {
    fn default() -> Self {
        let fonts = FONT_FAMILIES
            .iter()
            .zip(DEFAULT_FONT_FILES)
            .map(|(family, stem)| (family.to_string(), stem.to_string()))
            .collect();
        Self {
            assets_path: "./assets".to_string(),
            fonts,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fox Trader".to_string(),
            width: 1024,
            height: 576,
            resizable: true,
            assets: AssetsConfig::default(),
        }
    }
}
