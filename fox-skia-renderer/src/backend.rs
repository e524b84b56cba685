use std::any::Any;

use anyhow::{anyhow, Result};
use skia_safe::{
    surfaces, AlphaType, Canvas, ColorType, Font, FontMgr, Image, ImageInfo, Paint, PaintStyle, Surface,
};

use fox_ui::{Color, FontHandle, Point, Rect, Size, TextError, TextTexture, UiRenderer};

fn sk_color(color: Color) -> skia_safe::Color {
    skia_safe::Color::from_argb(color.a, color.r, color.g, color.b)
}

fn sk_rect(rect: Rect) -> skia_safe::Rect {
    skia_safe::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}

fn fill_paint(color: Color) -> Paint {
    let mut paint = Paint::default();
    paint.set_color(sk_color(color));
    paint.set_anti_alias(false);
    paint
}

/// Text rendered once into its own raster image.
pub struct SkiaTexture {
    image: Image,
    size: Size,
}

impl SkiaTexture {
    pub fn image(&self) -> &Image {
        &self.image
    }
}

impl TextTexture for SkiaTexture {
    fn size(&self) -> Size {
        self.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// CPU raster backend. Draws into an offscreen skia surface and, on
/// `present`, copies the pixels out as `0RGB` words for the window.
pub struct SkiaBackend {
    surface: Surface,
    font_mgr: FontMgr,
    fonts: Vec<Font>,
    pixels: Vec<u8>,
    frame: Vec<u32>,
    presented: u64,
}

impl SkiaBackend {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("Failed to create a {}x{} raster surface", width, height))?;
        let len = (width * height) as usize;
        Ok(Self {
            surface,
            font_mgr: FontMgr::default(),
            fonts: Vec::new(),
            pixels: vec![0; len * 4],
            frame: vec![0; len],
            presented: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Last presented frame, row-major.
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn canvas(&mut self) -> &Canvas {
        self.surface.canvas()
    }

    fn font(&self, handle: FontHandle) -> Option<&Font> {
        self.fonts.get(handle.0 as usize)
    }

    fn text_size(font: &Font, text: &str) -> Size {
        let (advance, _) = font.measure_str(text, None);
        let (_, metrics) = font.metrics();
        let height = metrics.descent - metrics.ascent;
        Size::new(advance.ceil() as i32, height.ceil() as i32)
    }
}

impl UiRenderer for SkiaBackend {
    fn clear(&mut self, color: Color) {
        self.canvas().clear(sk_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let paint = fill_paint(color);
        self.canvas().draw_rect(sk_rect(rect), &paint);
    }

    fn draw_border(&mut self, rect: Rect, color: Color) {
        let mut paint = fill_paint(color);
        paint.set_style(PaintStyle::Stroke);
        paint.set_stroke_width(1.0);
        // half-pixel inset keeps the stroke on the rect's own pixels
        let outline = skia_safe::Rect::from_xywh(
            rect.x as f32 + 0.5,
            rect.y as f32 + 0.5,
            (rect.w - 1).max(0) as f32,
            (rect.h - 1).max(0) as f32,
        );
        self.canvas().draw_rect(outline, &paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let mut paint = fill_paint(color);
        paint.set_stroke_width(1.0);
        self.canvas().draw_line(
            (from.x as f32 + 0.5, from.y as f32 + 0.5),
            (to.x as f32 + 0.5, to.y as f32 + 0.5),
            &paint,
        );
    }

    fn draw_texture(&mut self, texture: &dyn TextTexture, dest: Rect) {
        let Some(texture) = texture.as_any().downcast_ref::<SkiaTexture>() else {
            log::warn!("Texture from another backend ignored");
            return;
        };
        let image = texture.image.clone();
        let paint = Paint::default();
        self.canvas().draw_image_rect(image, None, sk_rect(dest), &paint);
    }

    fn present(&mut self) {
        let info = ImageInfo::new(
            (self.width(), self.height()),
            ColorType::BGRA8888,
            AlphaType::Premul,
            None,
        );
        let row_bytes = self.width() as usize * 4;
        if !self.surface.read_pixels(&info, &mut self.pixels, row_bytes, (0, 0)) {
            log::error!("Failed to read back the frame");
            return;
        }
        for (word, px) in self.frame.iter_mut().zip(self.pixels.chunks_exact(4)) {
            *word = u32::from_le_bytes([px[0], px[1], px[2], px[3]]) & 0x00FF_FFFF;
        }
        self.presented += 1;
    }

    fn load_font(&mut self, bytes: &[u8], point_size: u16) -> Option<FontHandle> {
        let typeface = self.font_mgr.new_from_data(bytes, None)?;
        let mut font = Font::from_typeface(typeface, point_size as f32);
        font.set_subpixel(true);
        let handle = FontHandle(self.fonts.len() as u32);
        self.fonts.push(font);
        Some(handle)
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> Option<Size> {
        self.font(font).map(|font| Self::text_size(font, text))
    }

    fn rasterize(&mut self, handle: FontHandle, text: &str, color: Color) -> Result<Box<dyn TextTexture>, TextError> {
        let font = self.font(handle).ok_or(TextError::InvalidHandle(handle))?;
        let size = Self::text_size(font, text);
        if size.w <= 0 || size.h <= 0 {
            return Err(TextError::Rasterize(format!("\"{}\" has no extent", text)));
        }

        let mut surface = surfaces::raster_n32_premul((size.w, size.h))
            .ok_or_else(|| TextError::Upload(format!("no {}x{} surface", size.w, size.h)))?;
        let (_, metrics) = font.metrics();
        let mut paint = fill_paint(color);
        paint.set_anti_alias(true);

        let canvas = surface.canvas();
        canvas.clear(skia_safe::Color::TRANSPARENT);
        canvas.draw_str(text, (0.0, -metrics.ascent), font, &paint);

        let image = surface.image_snapshot();
        log::trace!("Rasterized \"{}\" at {}x{}", text, size.w, size.h);
        Ok(Box::new(SkiaTexture { image, size }))
    }
}
