pub mod assets;
pub mod backend;
pub mod config;
pub mod renderer;

pub use backend::{SkiaBackend, SkiaTexture};
pub use renderer::SkiaRenderer;
