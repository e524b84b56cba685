use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path:  String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// FPS overlay state at startup; `f` still toggles it.
    pub show_fps:       bool,
    /// Start straight in the game screen.
    pub skip_main_menu: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path:  "logs/".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            show_fps:       false,
            skip_main_menu: false,
        }
    }
}

impl SystemConfig {
    pub fn load() -> Self {
        fox_shared::config::get("system")
    }
}

impl GameConfig {
    pub fn load() -> Self {
        fox_shared::config::get("game")
    }
}
