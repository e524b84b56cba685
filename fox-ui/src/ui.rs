use crate::fonts::{FontCache, FontFace};
use crate::input::{Event, Key};
use crate::renderer::{DrawContext, FontHandle, TextError, UiRenderer};
use crate::sink::{ErrorSink, Severity};
use crate::tree::{WidgetId, WidgetTree};
use crate::widgets::{TextCache, Widget};
use crate::{Color, Rect};

pub const CLEAR_COLOR: Color = Color::rgb(0x14, 0x14, 0x87);
pub const FPS_FONT: &str = "bold_24";

const FPS_CEILING: f64 = 2_000_000.0;

/// Owns the widget arena, the root list, fonts, and focus, and drives one
/// frame at a time.
pub struct Ui {
    tree: WidgetTree,
    roots: Vec<WidgetId>,
    fonts: FontCache,
    sink: Box<dyn ErrorSink>,
    total_frames: u64,
    show_fps: bool,
    needs_layout: bool,
    fps_text: TextCache,
}

impl Ui {
    pub fn new(sink: Box<dyn ErrorSink>) -> Self {
        Self {
            tree: WidgetTree::new(),
            roots: Vec::new(),
            fonts: FontCache::new(),
            sink,
            total_frames: 0,
            show_fps: false,
            needs_layout: true,
            fps_text: TextCache::new(),
        }
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.tree.get(id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.tree.get_mut(id)
    }

    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn show_fps(&self) -> bool {
        self.show_fps
    }

    pub fn set_show_fps(&mut self, show: bool) {
        self.show_fps = show;
    }

    pub fn toggle_fps(&mut self) {
        self.show_fps = !self.show_fps;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn report(&self, severity: Severity, message: &str) {
        self.sink.report(severity, message);
    }

    // ---- tree helpers ----

    /// Creates a widget that is not attached anywhere yet.
    pub fn create(&mut self, widget: Widget) -> WidgetId {
        self.tree.insert(widget)
    }

    /// Creates a widget and makes it a root.
    pub fn add(&mut self, widget: Widget) -> WidgetId {
        let id = self.tree.insert(widget);
        self.roots.push(id);
        id
    }

    pub fn add_root(&mut self, id: WidgetId) -> bool {
        if !self.tree.contains(id) {
            return false;
        }
        self.roots.push(id);
        true
    }

    pub fn remove_root(&mut self, id: WidgetId) -> bool {
        let before = self.roots.len();
        self.roots.retain(|root| *root != id);
        before != self.roots.len()
    }

    /// Creates `child` and appends it to `parent`.
    pub fn add_to(&mut self, parent: WidgetId, child: Widget) -> Option<WidgetId> {
        if !self.tree.contains(parent) {
            return None;
        }
        let id = self.tree.insert(child);
        self.tree.add_child(parent, id);
        Some(id)
    }

    pub fn add_panel(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        self.tree.add_child(parent, child)
    }

    pub fn remove_panel(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        self.tree.remove_child(parent, child)
    }

    pub fn destroy(&mut self, id: WidgetId) {
        self.remove_root(id);
        self.tree.remove_subtree(id);
    }

    /// Drops the current screen and schedules a rebuild on the next tick.
    pub fn reset_screen(&mut self) {
        for root in std::mem::take(&mut self.roots) {
            self.tree.remove_subtree(root);
        }
        self.needs_layout = true;
    }

    // ---- focus ----

    pub fn focused(&self) -> Option<WidgetId> {
        self.tree.focused()
    }

    pub fn request_focus(&mut self, id: WidgetId) -> bool {
        self.tree.request_focus(id)
    }

    /// True while a text box holds focus; hotkeys stand down then.
    pub fn text_input_focused(&self) -> bool {
        self.focused()
            .and_then(|id| self.tree.get(id))
            .is_some_and(|w| w.is_text_box())
    }

    // ---- fonts ----

    /// Loads every face at every standard size. Does nothing once the cache
    /// holds any font.
    pub fn init_fonts(&mut self, renderer: &mut dyn UiRenderer, faces: &[FontFace]) {
        if !self.fonts.is_empty() {
            return;
        }
        let failed = self.fonts.load_faces(renderer, faces);
        if failed > 0 {
            self.report(Severity::Warning, &format!("{} fonts failed to load", failed));
        }
        log::info!("Font cache holds {} fonts", self.fonts.len());
    }

    pub fn get_font(&self, name: &str) -> Option<FontHandle> {
        let font = self.fonts.get(name);
        if font.is_none() {
            self.report(Severity::Error, &format!("GetFont error: {}", TextError::UnknownFont(name.to_string())));
        }
        font
    }

    /// Unknown keys are ignored without a report.
    pub fn set_font(&mut self, id: WidgetId, name: &str) -> bool {
        if !self.fonts.contains(name) {
            return false;
        }
        match self.tree.get_mut(id) {
            Some(widget) => {
                widget.set_font_unchecked(name);
                true
            }
            None => false,
        }
    }

    // ---- frame ----

    /// Runs a widget's dirty pass right away.
    pub fn layout_now(&mut self, id: WidgetId, renderer: &mut dyn UiRenderer, now_ms: u64) {
        let mut ctx = DrawContext { renderer, fonts: &self.fonts, sink: &*self.sink, now_ms };
        if let Some(widget) = self.tree.get_mut(id) {
            if widget.needs_layout() {
                widget.layout(&mut ctx);
            }
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        let mut handled = false;
        for root in self.roots.clone().into_iter().rev() {
            handled |= self.tree.dispatch(root, event);
        }
        if event.is_key_up(Key::Char('f')) && !self.text_input_focused() {
            self.toggle_fps();
        }
        handled
    }

    /// Clear, draw, build the screen if it is due, overlay, present.
    pub fn tick<F>(&mut self, renderer: &mut dyn UiRenderer, now_ms: u64, build: F)
    where
        F: FnOnce(&mut Ui, &mut dyn UiRenderer),
    {
        renderer.clear(CLEAR_COLOR);
        self.draw_roots(renderer, now_ms);

        if self.needs_layout {
            self.needs_layout = false;
            build(self, renderer);
        }

        if self.show_fps {
            self.draw_fps(renderer, now_ms);
        }

        renderer.present();
        self.total_frames += 1;
    }

    fn draw_roots(&mut self, renderer: &mut dyn UiRenderer, now_ms: u64) {
        let mut ctx = DrawContext { renderer, fonts: &self.fonts, sink: &*self.sink, now_ms };
        for root in self.roots.iter().rev() {
            self.tree.draw(*root, &mut ctx);
        }
    }

    pub fn fps(&self, now_ms: u64) -> f64 {
        let seconds = now_ms as f64 / 1000.0;
        let fps = self.total_frames as f64 / seconds;
        if !fps.is_finite() || fps > FPS_CEILING {
            return 0.0;
        }
        fps
    }

    fn draw_fps(&mut self, renderer: &mut dyn UiRenderer, now_ms: u64) {
        let Some(font) = self.get_font(FPS_FONT) else {
            return;
        };
        let text = format!("{:.0}", self.fps(now_ms));
        match self.fps_text.ensure(renderer, font, &text, Color::RED) {
            Ok(size) => {
                if let Some(texture) = self.fps_text.texture() {
                    renderer.draw_texture(texture, Rect::new(3, 0, size.w, size.h));
                }
            }
            Err(err) => self.report(Severity::Error, &format!("DrawText error: {}", err)),
        }
    }
}
