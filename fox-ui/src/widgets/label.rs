use crate::fonts::DEFAULT_FONT;
use crate::renderer::{DrawContext, FontHandle, TextError, TextTexture, UiRenderer};
use crate::sink::Severity;
use crate::{Color, HorizontalAlign, Padding, Rect, Size, VerticalAlign};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextKey {
    text: String,
    font: FontHandle,
    color: Color,
}

/// Lazily rasterized text texture, keyed on what it was rendered from.
///
/// The texture is only regenerated when the (text, font, color) key changes.
#[derive(Default)]
pub struct TextCache {
    key: Option<TextKey>,
    texture: Option<Box<dyn TextTexture>>,
    size: Size,
    draw_rect: Rect,
}

impl TextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cached(&self) -> bool {
        self.texture.is_some()
    }

    /// Measured size of the last rasterized text.
    pub fn text_size(&self) -> Size {
        self.size
    }

    pub fn draw_rect(&self) -> Rect {
        self.draw_rect
    }

    pub fn set_draw_rect(&mut self, rect: Rect) {
        self.draw_rect = rect;
    }

    pub fn texture(&self) -> Option<&dyn TextTexture> {
        self.texture.as_deref()
    }

    /// Drops the texture. Geometry is kept.
    pub fn release(&mut self) {
        self.key = None;
        self.texture = None;
    }

    /// Drops the texture and zeroes the geometry.
    pub fn clear(&mut self) {
        self.release();
        self.size = Size::default();
        self.draw_rect = Rect::default();
    }

    pub fn ensure(
        &mut self,
        renderer: &mut dyn UiRenderer,
        font: FontHandle,
        text: &str,
        color: Color,
    ) -> Result<Size, TextError> {
        if self.texture.is_some() {
            if let Some(key) = &self.key {
                if key.font == font && key.color == color && key.text == text {
                    return Ok(self.size);
                }
            }
        }

        self.release();
        let texture = renderer.rasterize(font, text, color)?;
        self.size = texture.size();
        self.texture = Some(texture);
        self.key = Some(TextKey { text: text.to_string(), font, color });
        Ok(self.size)
    }
}

impl std::fmt::Debug for TextCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCache")
            .field("cached", &self.is_cached())
            .field("size", &self.size)
            .field("draw_rect", &self.draw_rect)
            .finish()
    }
}

/// Text presentation shared by labels, buttons, and text boxes.
#[derive(Debug)]
pub struct Text {
    pub(crate) content: String,
    pub(crate) font: String,
    pub(crate) color: Color,
    pub(crate) autosize: bool,
    pub(crate) blink: bool,
    pub(crate) h_align: HorizontalAlign,
    pub(crate) v_align: VerticalAlign,
    pub(crate) padding: Padding,
    pub(crate) cache: TextCache,
}

impl Text {
    pub(crate) fn label(content: String) -> Self {
        Self {
            content,
            font: DEFAULT_FONT.to_string(),
            color: Color::BLACK,
            autosize: true,
            blink: false,
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Top,
            padding: Padding::symmetric(5, 10),
            cache: TextCache::new(),
        }
    }

    pub(crate) fn field() -> Self {
        Self {
            autosize: false,
            padding: Padding::zero(),
            ..Self::label(String::new())
        }
    }

    /// Makes sure the cached texture matches the current text. Failures are
    /// reported and yield `None`.
    pub(crate) fn refresh(&mut self, ctx: &mut DrawContext) -> Option<Size> {
        let Some(font) = ctx.fonts.get(&self.font) else {
            self.cache.release();
            let err = TextError::UnknownFont(self.font.clone());
            ctx.report(Severity::Error, &format!("DrawText error: {}", err));
            return None;
        };

        match self.cache.ensure(&mut *ctx.renderer, font, &self.content, self.color) {
            Ok(size) => Some(size),
            Err(err) => {
                ctx.report(Severity::Error, &format!("DrawText error: {}", err));
                None
            }
        }
    }

    /// Grows `rect` for autosize and padding, then positions the text.
    pub(crate) fn layout_label(&mut self, rect: &mut Rect, size: Size) {
        if self.autosize {
            rect.w = size.w;
            rect.h = size.h;
        }

        let pad = self.padding;
        if pad.has_vertical() {
            rect.h += pad.top + pad.bottom;
        }
        if pad.has_horizontal() {
            rect.w += pad.left + pad.right;
        }

        let x = match self.h_align {
            HorizontalAlign::Left => rect.x,
            HorizontalAlign::Center => rect.x + (rect.w / 2 - size.w / 2),
            HorizontalAlign::Right => rect.x + (rect.w - size.w),
        };
        let y = match self.v_align {
            VerticalAlign::Top => rect.y,
            VerticalAlign::Middle => rect.y + (rect.h / 2 - size.h / 2),
            VerticalAlign::Bottom => rect.y + (rect.h - size.h),
        };

        self.cache.set_draw_rect(Rect::new(x + pad.left, y + pad.top, size.w, size.h));
    }

    pub(crate) fn paint(&self, ctx: &mut DrawContext) {
        if let Some(texture) = self.cache.texture() {
            ctx.renderer.draw_texture(texture, self.cache.draw_rect());
        }
    }
}
