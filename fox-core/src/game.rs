use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fox_ui::{Event, FontFace, Key, LogSink, Ui, UiRenderer};

use crate::config::GameConfig;
use crate::event::{Command, CommandQueue};
use crate::player::Player;
use crate::screens::{GameScreen, MainMenuScreen, Screen, ScreenCtx};
use crate::universe::Universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    GameScreen,
}

/// Everything that only exists while a game is in progress.
#[derive(Debug, Clone)]
pub struct Session {
    pub universe: Universe,
    pub player: Player,
}

impl Session {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, pilot: Option<String>) -> Self {
        let universe = Universe::generate(rng);
        let player = match pilot {
            Some(name) => Player::new(name),
            None => Player::default(),
        };
        Self { universe, player }
    }
}

/// The game shell: state machine, command queue, and the UI it drives.
pub struct Game {
    state: GameState,
    running: bool,
    ui: Ui,
    sink: Rc<LogSink>,
    commands: CommandQueue,
    screen: Box<dyn Screen>,
    session: Option<Session>,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let sink = Rc::new(LogSink::new());
        let mut ui = Ui::new(Box::new(sink.clone()));
        ui.set_show_fps(config.show_fps);

        let mut game = Self {
            state: GameState::MainMenu,
            running: true,
            ui,
            sink,
            commands: CommandQueue::new(),
            screen: Box::new(MainMenuScreen::new()),
            session: None,
            rng,
        };

        log::info!("Here we go!");
        if config.skip_main_menu {
            game.start_game(None);
        }
        game
    }

    pub fn state(&self) -> GameState { self.state }
    pub fn ui(&self) -> &Ui { &self.ui }
    pub fn ui_mut(&mut self) -> &mut Ui { &mut self.ui }
    pub fn session(&self) -> Option<&Session> { self.session.as_ref() }
    pub fn commands(&self) -> &CommandQueue { &self.commands }

    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }

    /// False once a quit was requested or an error was reported.
    pub fn is_running(&self) -> bool {
        self.running && !self.sink.shutdown_requested()
    }

    pub fn init_fonts(&mut self, renderer: &mut dyn UiRenderer, faces: &[FontFace]) {
        self.ui.init_fonts(renderer, faces);
    }

    pub fn process_event(&mut self, event: &Event) {
        match event {
            Event::Quit => self.commands.push(Command::Quit),
            Event::KeyUp(ev) if !self.ui.text_input_focused() => match ev.key {
                Key::Space if self.state == GameState::MainMenu => self.commands.push(Command::StartGame),
                Key::Escape if self.state == GameState::GameScreen => self.commands.push(Command::MainMenu),
                Key::Char('q') => self.commands.push(Command::Quit),
                _ => {}
            },
            _ => {}
        }

        self.ui.handle_event(event);
        self.apply_commands();
    }

    fn apply_commands(&mut self) {
        for command in self.commands.drain() {
            match command {
                Command::StartGame if self.state == GameState::MainMenu => {
                    let pilot = self.screen.pilot_name(&self.ui);
                    self.start_game(pilot);
                }
                Command::MainMenu if self.state == GameState::GameScreen => self.main_menu(),
                Command::SelectGalaxy(index) => {
                    if let Some(session) = self.session.as_mut() {
                        if index < session.universe.galaxies().len() {
                            session.player.set_galaxy_index(index);
                        }
                    }
                }
                Command::Quit => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                Command::StartGame | Command::MainMenu => {}
            }
        }
    }

    fn start_game(&mut self, pilot: Option<String>) {
        let session = Session::generate(&mut self.rng, pilot);
        log::info!("Starting game for pilot {}", session.player.name());
        self.session = Some(session);
        self.state = GameState::GameScreen;
        self.screen = Box::new(GameScreen::new());
        self.ui.reset_screen();
    }

    fn main_menu(&mut self) {
        log::info!("Back to the main menu");
        self.session = None;
        self.state = GameState::MainMenu;
        self.screen = Box::new(MainMenuScreen::new());
        self.ui.reset_screen();
    }

    pub fn tick(&mut self, now_ms: u64) {
        if self.state == GameState::GameScreen {
            if let Some(session) = self.session.as_mut() {
                session.universe.tick();
            }
        }
        let ctx = ScreenCtx { session: self.session.as_ref(), commands: &self.commands, now_ms };
        self.screen.update(&mut self.ui, &ctx);
    }

    pub fn render(&mut self, renderer: &mut dyn UiRenderer, now_ms: u64) {
        let ctx = ScreenCtx { session: self.session.as_ref(), commands: &self.commands, now_ms };
        let screen = &mut self.screen;
        self.ui.tick(renderer, now_ms, |ui, renderer| screen.build(ui, renderer, &ctx));
    }
}
