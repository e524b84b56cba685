use std::collections::HashMap;

use crate::renderer::{FontHandle, UiRenderer};

/// Point sizes every face is loaded at.
pub const FONT_SIZES: [u16; 6] = [12, 16, 24, 32, 64, 96];

pub const DEFAULT_FONT: &str = "regular_12";

/// Families the game ships with.
pub const FONT_FAMILIES: [&str; 9] = [
    "regular",
    "light",
    "bold",
    "italic",
    "light_italic",
    "bold_italic",
    "small_caps",
    "light_small_caps",
    "bold_small_caps",
];

/// Raw font file for one family, e.g. `("bold", <ttf bytes>)`.
#[derive(Debug, Clone)]
pub struct FontFace {
    pub family: String,
    pub bytes: Vec<u8>,
}

impl FontFace {
    pub fn new(family: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { family: family.into(), bytes }
    }
}

pub fn font_key(family: &str, size: u16) -> String {
    format!("{}_{}", family, size)
}

/// Name → loaded font. Keys look like `bold_64`.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<String, FontHandle>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Silent lookup; see `Ui::get_font` for the reporting variant.
    pub fn get(&self, name: &str) -> Option<FontHandle> {
        self.fonts.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, handle: FontHandle) {
        self.fonts.insert(name.into(), handle);
    }

    /// Loads every face at every size in [`FONT_SIZES`]. Returns the number of
    /// fonts that failed to load.
    pub fn load_faces(&mut self, renderer: &mut dyn UiRenderer, faces: &[FontFace]) -> usize {
        let mut failed = 0;
        for face in faces {
            for size in FONT_SIZES {
                let key = font_key(&face.family, size);
                match renderer.load_font(&face.bytes, size) {
                    Some(handle) => {
                        log::debug!("Loaded font '{}'", key);
                        self.fonts.insert(key, handle);
                    }
                    None => {
                        log::warn!("Failed to load font '{}'", key);
                        failed += 1;
                    }
                }
            }
        }
        failed
    }
}
