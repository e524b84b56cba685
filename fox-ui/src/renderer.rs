use std::any::Any;
use thiserror::Error;

use crate::sink::{ErrorSink, Severity};
use crate::fonts::FontCache;
use crate::{Color, Point, Rect, Size};

/// Opaque handle to a font loaded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u32);

/// A rasterized piece of text owned by the backend.
///
/// Dropping the box releases the underlying resource.
pub trait TextTexture {
    fn size(&self) -> Size;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("font name [\"{0}\"] does not exist")]
    UnknownFont(String),
    #[error("font handle {0:?} is not loaded")]
    InvalidHandle(FontHandle),
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("texture upload failed: {0}")]
    Upload(String),
}

/// Drawing surface plus text service, implemented by the platform backend.
pub trait UiRenderer {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One pixel outline on the inside of `rect`.
    fn draw_border(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    fn draw_texture(&mut self, texture: &dyn TextTexture, dest: Rect);

    fn present(&mut self);

    fn load_font(&mut self, bytes: &[u8], point_size: u16) -> Option<FontHandle>;

    fn measure_text(&self, font: FontHandle, text: &str) -> Option<Size>;

    fn rasterize(&mut self, font: FontHandle, text: &str, color: Color) -> Result<Box<dyn TextTexture>, TextError>;
}

/// Everything a widget needs while it paints itself.
pub struct DrawContext<'a> {
    pub renderer: &'a mut dyn UiRenderer,
    pub fonts: &'a FontCache,
    pub sink: &'a dyn ErrorSink,
    pub now_ms: u64,
}

impl<'a> DrawContext<'a> {
    pub fn report(&self, severity: Severity, message: &str) {
        self.sink.report(severity, message);
    }

    /// 250 ms on, 250 ms off.
    pub fn blink_on(&self) -> bool {
        blink_on(self.now_ms)
    }
}

pub fn blink_on(now_ms: u64) -> bool {
    now_ms % 500 < 250
}
