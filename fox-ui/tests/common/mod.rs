#![allow(dead_code)]

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use fox_ui::{
    Color, ErrorSink, FontFace, FontHandle, Point, Rect, Severity, Size, TextError, TextTexture, Ui,
    UiRenderer,
};

pub const FAMILIES: [&str; 9] = fox_ui::FONT_FAMILIES;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear(Color),
    Fill(Rect, Color),
    Border(Rect, Color),
    Line(Point, Point, Color),
    Texture(String, Rect),
    Present,
}

pub struct MockTexture {
    pub text: String,
    size: Size,
    drops: Rc<Cell<usize>>,
}

impl TextTexture for MockTexture {
    fn size(&self) -> Size {
        self.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockTexture {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Every glyph is `point_size / 2` wide and `point_size` tall.
#[derive(Default)]
pub struct MockRenderer {
    pub ops: Vec<Op>,
    pub rasterized: usize,
    pub drops: Rc<Cell<usize>>,
    pub fail_rasterize: bool,
    pub fail_load: bool,
    fonts: HashMap<u32, u16>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn textures(&self) -> Vec<(String, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Texture(text, rect) => Some((text.clone(), *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, c) => Some((*a, *b, *c)),
                _ => None,
            })
            .collect()
    }
}

impl UiRenderer for MockRenderer {
    fn clear(&mut self, color: Color) {
        self.ops.push(Op::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn draw_border(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Border(rect, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.ops.push(Op::Line(from, to, color));
    }

    fn draw_texture(&mut self, texture: &dyn TextTexture, dest: Rect) {
        let text = texture
            .as_any()
            .downcast_ref::<MockTexture>()
            .map(|t| t.text.clone())
            .unwrap_or_default();
        self.ops.push(Op::Texture(text, dest));
    }

    fn present(&mut self) {
        self.ops.push(Op::Present);
    }

    fn load_font(&mut self, _bytes: &[u8], point_size: u16) -> Option<FontHandle> {
        if self.fail_load {
            return None;
        }
        let handle = self.fonts.len() as u32;
        self.fonts.insert(handle, point_size);
        Some(FontHandle(handle))
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> Option<Size> {
        let size = *self.fonts.get(&font.0)? as i32;
        Some(Size::new(text.chars().count() as i32 * (size / 2), size))
    }

    fn rasterize(&mut self, font: FontHandle, text: &str, _color: Color) -> Result<Box<dyn TextTexture>, TextError> {
        if self.fail_rasterize {
            return Err(TextError::Rasterize("mock failure".to_string()));
        }
        let size = self.measure_text(font, text).ok_or(TextError::InvalidHandle(font))?;
        self.rasterized += 1;
        Ok(Box::new(MockTexture { text: text.to_string(), size, drops: self.drops.clone() }))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub reports: RefCell<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn errors(&self) -> usize {
        self.reports.borrow().iter().filter(|(s, _)| *s == Severity::Error).count()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, severity: Severity, message: &str) {
        self.reports.borrow_mut().push((severity, message.to_string()));
    }
}

pub fn faces() -> Vec<FontFace> {
    FAMILIES.iter().map(|f| FontFace::new(*f, Vec::new())).collect()
}

/// A `Ui` with every standard font loaded into `renderer`.
pub fn ui_with_fonts(renderer: &mut MockRenderer) -> (Ui, Rc<RecordingSink>) {
    let sink = Rc::new(RecordingSink::default());
    let mut ui = Ui::new(Box::new(sink.clone()));
    ui.init_fonts(renderer, &faces());
    (ui, sink)
}

/// Runs one frame with a no-op screen builder.
pub fn frame(ui: &mut Ui, renderer: &mut MockRenderer, now_ms: u64) {
    ui.tick(renderer, now_ms, |_, _| {});
}
