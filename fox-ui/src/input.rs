use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Delete,
    Backspace,
    Return,
    Escape,
    Tab,
    Space,
    /// Printable key, lower-cased where the host reports case.
    Char(char),
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    pub fn moved(x: i32, y: i32) -> Self {
        Self { position: Point::new(x, y), button: None }
    }

    pub fn button(x: i32, y: i32, button: MouseButton) -> Self {
        Self { position: Point::new(x, y), button: Some(button) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    /// Cursor position at the time of the scroll.
    pub position: Point,
    pub delta_x: i32,
    pub delta_y: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextEvent {
    pub text: String,
}

/// Host input, already translated out of the windowing library.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    TextInput(TextEvent),
    MouseMotion(PointerEvent),
    MouseButtonDown(PointerEvent),
    MouseButtonUp(PointerEvent),
    MouseWheel(WheelEvent),
}

impl Event {
    pub fn key_down(key: Key) -> Self {
        Event::KeyDown(KeyEvent { key })
    }

    pub fn key_up(key: Key) -> Self {
        Event::KeyUp(KeyEvent { key })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Event::TextInput(TextEvent { text: text.into() })
    }

    pub fn motion(x: i32, y: i32) -> Self {
        Event::MouseMotion(PointerEvent::moved(x, y))
    }

    pub fn mouse_down(x: i32, y: i32) -> Self {
        Event::MouseButtonDown(PointerEvent::button(x, y, MouseButton::Left))
    }

    pub fn mouse_up(x: i32, y: i32) -> Self {
        Event::MouseButtonUp(PointerEvent::button(x, y, MouseButton::Left))
    }

    pub fn wheel(x: i32, y: i32, delta_y: i32) -> Self {
        Event::MouseWheel(WheelEvent { position: Point::new(x, y), delta_x: 0, delta_y })
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        matches!(self, Event::KeyUp(ev) if ev.key == key)
    }
}
