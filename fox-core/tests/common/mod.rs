#![allow(dead_code)]

use std::any::Any;

use fox_ui::{Color, FontFace, FontHandle, Point, Rect, Size, TextError, TextTexture, UiRenderer};

struct Texture(Size);

impl TextTexture for Texture {
    fn size(&self) -> Size {
        self.0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Counts frames and measures glyphs as `point_size / 2` wide.
#[derive(Default)]
pub struct NullRenderer {
    pub presented: usize,
    sizes: Vec<u16>,
}

impl UiRenderer for NullRenderer {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn draw_border(&mut self, _rect: Rect, _color: Color) {}
    fn draw_line(&mut self, _from: Point, _to: Point, _color: Color) {}
    fn draw_texture(&mut self, _texture: &dyn TextTexture, _dest: Rect) {}

    fn present(&mut self) {
        self.presented += 1;
    }

    fn load_font(&mut self, _bytes: &[u8], point_size: u16) -> Option<FontHandle> {
        self.sizes.push(point_size);
        Some(FontHandle(self.sizes.len() as u32 - 1))
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> Option<Size> {
        let size = *self.sizes.get(font.0 as usize)? as i32;
        Some(Size::new(text.chars().count() as i32 * (size / 2), size))
    }

    fn rasterize(&mut self, font: FontHandle, text: &str, _color: Color) -> Result<Box<dyn TextTexture>, TextError> {
        let size = self.measure_text(font, text).ok_or(TextError::InvalidHandle(font))?;
        Ok(Box::new(Texture(size)))
    }
}

pub fn faces() -> Vec<FontFace> {
    fox_ui::FONT_FAMILIES.iter().map(|f| FontFace::new(*f, Vec::new())).collect()
}
