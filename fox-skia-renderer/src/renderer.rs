use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context as _, Result};
use softbuffer::{Context, Surface};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key as WinitKey, NamedKey},
    window::{Window, WindowId},
};

use fox_core::screens::{SCREEN_HEIGHT, SCREEN_WIDTH};
use fox_core::Game;
use fox_ui::{Event, FontFace, Key};

use crate::backend::SkiaBackend;
use crate::config::WindowConfig;

const DESIGN_WIDTH: f32 = SCREEN_WIDTH as f32;
const DESIGN_HEIGHT: f32 = SCREEN_HEIGHT as f32;

/// Pixels per wheel notch for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f64 = 16.0;

type WindowSurface = Surface<Arc<Window>, Arc<Window>>;

/// Letterbox placement of the design resolution inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl Viewport {
    pub fn fit(win_w: u32, win_h: u32) -> Self {
        let (win_w, win_h) = (win_w as f32, win_h as f32);
        let scale = (win_w / DESIGN_WIDTH).min(win_h / DESIGN_HEIGHT);
        Self {
            scale,
            off_x: (win_w - DESIGN_WIDTH * scale) / 2.0,
            off_y: (win_h - DESIGN_HEIGHT * scale) / 2.0,
        }
    }

    pub fn to_logical(&self, physical_x: f32, physical_y: f32) -> (i32, i32) {
        if self.scale == 0.0 {
            return (0, 0);
        }
        (
            ((physical_x - self.off_x) / self.scale).floor() as i32,
            ((physical_y - self.off_y) / self.scale).floor() as i32,
        )
    }
}

/// Nearest-neighbour blit of the design-sized frame into the window buffer.
pub fn blit(frame: &[u32], dest: &mut [u32], win_w: u32, win_h: u32) {
    let view = Viewport::fit(win_w, win_h);
    let (src_w, src_h) = (SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);
    for y in 0..win_h as usize {
        let row = &mut dest[y * win_w as usize..(y + 1) * win_w as usize];
        let sy = (y as f32 - view.off_y) / view.scale;
        if sy < 0.0 || sy as usize >= src_h {
            row.fill(0);
            continue;
        }
        let src_row = &frame[sy as usize * src_w..(sy as usize + 1) * src_w];
        for (x, px) in row.iter_mut().enumerate() {
            let sx = (x as f32 - view.off_x) / view.scale;
            *px = if sx < 0.0 || sx as usize >= src_w { 0 } else { src_row[sx as usize] };
        }
    }
}

pub fn convert_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::ArrowLeft => Key::Left,
            NamedKey::ArrowRight => Key::Right,
            NamedKey::ArrowUp => Key::Up,
            NamedKey::ArrowDown => Key::Down,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::Delete => Key::Delete,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Enter => Key::Return,
            NamedKey::Escape => Key::Escape,
            NamedKey::Tab => Key::Tab,
            NamedKey::Space => Key::Space,
            _ => Key::Unknown,
        },
        WinitKey::Character(s) => match s.chars().next() {
            Some(' ') => Key::Space,
            Some(c) => Key::Char(c.to_ascii_lowercase()),
            None => Key::Unknown,
        },
        _ => Key::Unknown,
    }
}

/// Translates one keyboard event; a press may also carry typed text.
pub fn convert_keyboard(event: &KeyEvent) -> Vec<Event> {
    let key = convert_key(&event.logical_key);
    match event.state {
        ElementState::Pressed => {
            let mut events = vec![Event::key_down(key)];
            if let Some(text) = event.text.as_ref() {
                if !text.is_empty() && !text.chars().any(char::is_control) {
                    events.push(Event::text(text.as_str()));
                }
            }
            events
        }
        ElementState::Released => vec![Event::key_up(key)],
    }
}

fn convert_button(button: MouseButton) -> fox_ui::MouseButton {
    match button {
        MouseButton::Left => fox_ui::MouseButton::Left,
        MouseButton::Middle => fox_ui::MouseButton::Middle,
        MouseButton::Right => fox_ui::MouseButton::Right,
        MouseButton::Back => fox_ui::MouseButton::Other(4),
        MouseButton::Forward => fox_ui::MouseButton::Other(5),
        MouseButton::Other(n) => fox_ui::MouseButton::Other(n),
    }
}

pub struct SkiaRenderer {
    config: WindowConfig,
    game: Game,
    backend: SkiaBackend,

    window: Option<Arc<Window>>,
    // kept alive for the surface
    _context: Option<Context<Arc<Window>>>,
    surface: Option<WindowSurface>,

    cursor: (i32, i32),
    started: Instant,
}

impl SkiaRenderer {
    pub fn new(config: WindowConfig, mut game: Game, faces: &[FontFace]) -> Result<Self> {
        let mut backend = SkiaBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT)?;
        game.init_fonts(&mut backend, faces);

        Ok(Self {
            config,
            game,
            backend,
            window: None,
            _context: None,
            surface: None,
            cursor: (0, 0),
            started: Instant::now(),
        })
    }

    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new().context("Failed to create the event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self).context("Event loop failed")?;
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        self.game.process_event(&event);
        if !self.game.is_running() {
            event_loop.exit();
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = Arc::new(event_loop.create_window(attributes).context("Failed to create window")?);
        let context = Context::new(window.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        self.window = Some(window);
        self._context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Event {
        let size = self.window.as_ref().map(|w| w.inner_size()).unwrap_or_default();
        let view = Viewport::fit(size.width, size.height);
        self.cursor = view.to_logical(position.x as f32, position.y as f32);
        Event::motion(self.cursor.0, self.cursor.1)
    }

    fn redraw(&mut self) -> Result<()> {
        let now = self.now_ms();
        self.game.tick(now);
        self.game.render(&mut self.backend, now);

        let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
            return Ok(());
        };
        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to map surface buffer: {}", e))?;
        blit(self.backend.frame(), &mut buffer, size.width, size.height);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present frame: {}", e))?;
        Ok(())
    }
}

impl ApplicationHandler for SkiaRenderer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("{:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.dispatch(event_loop, Event::Quit),

            WindowEvent::KeyboardInput { event, .. } => {
                for translated in convert_keyboard(&event) {
                    self.dispatch(event_loop, translated);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let motion = self.cursor_moved(position);
                self.dispatch(event_loop, motion);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.cursor;
                let pointer = fox_ui::PointerEvent::button(x, y, convert_button(button));
                let translated = match state {
                    ElementState::Pressed => Event::MouseButtonDown(pointer),
                    ElementState::Released => Event::MouseButtonUp(pointer),
                };
                self.dispatch(event_loop, translated);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y.round() as i32,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE).round() as i32,
                };
                let (x, y) = self.cursor;
                self.dispatch(event_loop, Event::wheel(x, y, delta_y));
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("{:#}", e);
                    event_loop.exit();
                }
                if !self.game.is_running() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
