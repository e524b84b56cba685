mod config_gen;
mod setup;

use std::process::ExitCode;

use anyhow::Result;

use fox_core::config::GameConfig;
use fox_core::Game;
use fox_skia_renderer::assets::AssetManager;
use fox_skia_renderer::config::WindowConfig;
use fox_skia_renderer::SkiaRenderer;

fn run() -> Result<()> {
    setup::init()?;
    log::info!(">>> Fox Trader Launcher Started <<<");

    let window_cfg: WindowConfig = fox_shared::config::get("window");
    let game_cfg = GameConfig::load();

    let assets = AssetManager::new(&window_cfg.assets.assets_path);
    let faces = assets.font_faces(&window_cfg.assets);
    log::info!("Loaded {} font faces", faces.len());

    let game = Game::new(&game_cfg);
    let app = SkiaRenderer::new(window_cfg, game, &faces)?;
    app.run()?;

    log::info!("See you, space fox");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("foxtrader: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
