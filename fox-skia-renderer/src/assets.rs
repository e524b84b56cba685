use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use fox_ui::FontFace;

use crate::config::AssetsConfig;

/// Index of the font files under the asset root, keyed by file stem.
pub struct AssetManager {
    font_paths: HashMap<String, PathBuf>,
    root_path: PathBuf,
}

impl AssetManager {
    pub fn new(root_path: &str) -> Self {
        let mut manager = Self {
            font_paths: HashMap::new(),
            root_path: PathBuf::from(root_path),
        };

        manager.scan_assets();
        manager
    }

    fn scan_assets(&mut self) {
        log::info!("Scanning assets in {:?}...", self.root_path);

        for entry in WalkDir::new(&self.root_path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            if !matches!(ext.to_lowercase().as_str(), "ttf" | "otf") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if self.font_paths.contains_key(stem) {
                    log::warn!("Duplicate font name detected: '{}'. Overwriting with {:?}", stem, path);
                }
                self.font_paths.insert(stem.to_string(), path.to_path_buf());
            }
        }

        log::info!("Asset scan complete. Fonts: {}", self.font_paths.len());
    }

    pub fn font_path(&self, stem: &str) -> Option<&PathBuf> {
        self.font_paths.get(stem)
    }

    /// Reads one face per configured family. Missing or unreadable files are
    /// logged and skipped; the UI reports the gaps when it looks fonts up.
    pub fn font_faces(&self, config: &AssetsConfig) -> Vec<FontFace> {
        let mut faces = Vec::with_capacity(config.fonts.len());
        for (family, stem) in &config.fonts {
            let Some(path) = self.font_path(stem) else {
                log::error!("Font file '{}' for family '{}' not found", stem, family);
                continue;
            };
            match fs::read(path) {
                Ok(bytes) => {
                    log::debug!("Loaded font file {:?} as '{}'", path, family);
                    faces.push(FontFace::new(family.clone(), bytes));
                }
                Err(e) => log::error!("Failed to read font file {:?}: {}", path, e),
            }
        }
        faces
    }
}
