mod common;

use common::{faces, NullRenderer};
use fox_core::config::GameConfig;
use fox_core::screens::game_screen::galaxy_entry;
use fox_core::{Game, GameState};
use fox_ui::{Color, Event, Key, Rect, Severity, Ui, WidgetId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game_with(config: GameConfig) -> (Game, NullRenderer) {
    let mut renderer = NullRenderer::default();
    let mut game = Game::with_rng(&config, StdRng::seed_from_u64(42));
    game.init_fonts(&mut renderer, &faces());
    (game, renderer)
}

fn game() -> (Game, NullRenderer) {
    game_with(GameConfig::default())
}

/// Two frames: the first builds the screen, the second lays it out.
fn settle(game: &mut Game, renderer: &mut NullRenderer) {
    for now in [0, 16] {
        game.tick(now);
        game.render(renderer, now);
    }
}

fn find_text(ui: &Ui, text: &str) -> Option<WidgetId> {
    fn walk(ui: &Ui, id: WidgetId, text: &str) -> Option<WidgetId> {
        let widget = ui.widget(id)?;
        if widget.text() == Some(text) {
            return Some(id);
        }
        widget.children().iter().find_map(|child| walk(ui, *child, text))
    }
    ui.roots().iter().find_map(|root| walk(ui, *root, text))
}

fn click(game: &mut Game, x: i32, y: i32) {
    game.process_event(&Event::motion(x, y));
    game.process_event(&Event::mouse_down(x, y));
    game.process_event(&Event::mouse_up(x, y));
}

#[test]
fn boots_into_the_main_menu() {
    let (mut game, mut renderer) = game();
    assert_eq!(game.state(), GameState::MainMenu);
    assert!(game.is_running());
    assert!(game.session().is_none());

    settle(&mut game, &mut renderer);
    assert_eq!(renderer.presented, 2);
    assert_eq!(game.ui().roots().len(), 7);
    assert!(find_text(game.ui(), "Fox Trader").is_some());
    assert!(find_text(game.ui(), "Press SPACE BAR to start").is_some());
}

#[test]
fn space_starts_and_escape_returns() {
    let (mut game, mut renderer) = game();
    settle(&mut game, &mut renderer);

    game.process_event(&Event::key_up(Key::Space));
    assert_eq!(game.state(), GameState::GameScreen);
    let session = game.session().unwrap();
    assert_eq!(session.player.name(), "Fox");
    assert_eq!(session.universe.galaxies().len(), 128);
    assert!(game.ui().roots().is_empty());
    assert!(game.ui().needs_layout());

    settle(&mut game, &mut renderer);
    assert!(find_text(game.ui(), "Current Galaxies:").is_some());
    assert!(find_text(game.ui(), "2,500 cr").is_some());
    assert!(find_text(game.ui(), "PILOT: Fox").is_some());

    game.process_event(&Event::key_up(Key::Escape));
    assert_eq!(game.state(), GameState::MainMenu);
    assert!(game.session().is_none());
    settle(&mut game, &mut renderer);
    assert!(find_text(game.ui(), "Fox Trader").is_some());
}

#[test]
fn escape_in_the_menu_and_space_in_game_do_nothing() {
    let (mut game, mut renderer) = game();
    settle(&mut game, &mut renderer);
    game.process_event(&Event::key_up(Key::Escape));
    assert_eq!(game.state(), GameState::MainMenu);

    game.process_event(&Event::key_up(Key::Space));
    let first = game.session().unwrap().universe.galaxies()[0].name().to_string();
    game.process_event(&Event::key_up(Key::Space));
    assert_eq!(game.session().unwrap().universe.galaxies()[0].name(), first);
}

#[test]
fn pilot_name_and_ok_button_start_the_game() {
    let (mut game, mut renderer) = game();
    settle(&mut game, &mut renderer);

    // pilot text box
    click(&mut game, 500, 190);
    for c in ["V", "i", "x"] {
        game.process_event(&Event::text(c));
    }
    // typing a space or q must not trigger hotkeys
    game.process_event(&Event::key_up(Key::Space));
    game.process_event(&Event::key_up(Key::Char('q')));
    assert_eq!(game.state(), GameState::MainMenu);
    assert!(game.is_running());

    // OK button is centered on the screen
    click(&mut game, 512, 288);
    assert_eq!(game.state(), GameState::GameScreen);
    assert_eq!(game.session().unwrap().player.name(), "Vix");
}

#[test]
fn q_and_quit_stop_the_game() {
    let (mut game, _) = game();
    game.process_event(&Event::key_up(Key::Char('q')));
    assert!(!game.is_running());

    let (mut game, _) = self::game();
    game.process_event(&Event::Quit);
    assert!(!game.is_running());
}

#[test]
fn error_reports_request_shutdown() {
    let (game, _) = game();
    game.ui().report(Severity::Warning, "just a warning");
    assert!(game.is_running());
    game.ui().report(Severity::Error, "boom");
    assert!(!game.is_running());
}

#[test]
fn clicking_a_galaxy_selects_it() {
    let (mut game, mut renderer) = game_with(GameConfig { skip_main_menu: true, ..GameConfig::default() });
    assert_eq!(game.state(), GameState::GameScreen);
    settle(&mut game, &mut renderer);

    let name = game.session().unwrap().universe.galaxies()[5].name().to_string();
    let id = find_text(game.ui(), &galaxy_entry(5, &name)).unwrap();
    let rect = game.ui().widget(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (10, 55 + 5 * 14));

    click(&mut game, rect.x + 2, rect.y + 2);
    assert_eq!(game.session().unwrap().player.galaxy_index(), 5);

    game.tick(32);
    let readout = format!("Galaxy #6 {} (42 systems)", name);
    assert!(find_text(game.ui(), &readout).is_some());
}

#[test]
fn show_fps_config_enables_the_overlay() {
    let (game, _) = game_with(GameConfig { show_fps: true, ..GameConfig::default() });
    assert!(game.ui().show_fps());
}

#[test]
fn footer_shows_pilot_and_date_on_light_grey() {
    let (mut game, mut renderer) = game_with(GameConfig { skip_main_menu: true, ..GameConfig::default() });
    settle(&mut game, &mut renderer);

    let ui = game.ui();
    let pilot = ui.widget(find_text(ui, "PILOT: Fox").unwrap()).unwrap();
    assert_eq!(pilot.font(), Some("bold_24"));
    assert_eq!(pilot.text_color(), Some(Color::BLACK));
    assert_eq!((pilot.x(), pilot.y()), (10, 550));

    let footer = ui.widget(pilot.parent().unwrap()).unwrap();
    assert_eq!(footer.rect(), Rect::new(0, 550, 1024, 26));
    assert_eq!(footer.background_color(), Color::rgb(200, 200, 200));

    let date = ui.widget(footer.children()[1]).unwrap();
    assert!(date.text().unwrap().ends_with(" UTC"));
    assert_eq!(date.font(), Some("bold_24"));
    assert_eq!(date.text_color(), Some(Color::rgb(128, 0, 0)));
    assert_eq!(date.rect().right(), 1014);
}
