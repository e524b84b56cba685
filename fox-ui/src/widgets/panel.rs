use crate::input::{Event, Key, KeyEvent, PointerEvent, TextEvent, WheelEvent};
use crate::observable::Observable;
use crate::renderer::DrawContext;
use crate::tree::WidgetId;
use crate::widgets::button::Chrome;
use crate::widgets::label::Text;
use crate::widgets::textbox::{Caret, CaretOutcome, TEXT_INSET};
use crate::{Color, HorizontalAlign, Padding, Point, Rect, VerticalAlign};

/// Per-event-kind delegate lists of a widget.
#[derive(Default)]
pub struct Delegates {
    pub mouse_over: Observable<Widget, PointerEvent>,
    pub mouse_out: Observable<Widget, PointerEvent>,
    pub mouse_up: Observable<Widget, PointerEvent>,
    pub mouse_down: Observable<Widget, PointerEvent>,
    pub mouse_move: Observable<Widget, PointerEvent>,
    pub mouse_wheel: Observable<Widget, WheelEvent>,
    pub key_up: Observable<Widget, KeyEvent>,
    pub key_down: Observable<Widget, KeyEvent>,
    pub text: Observable<Widget, TextEvent>,
}

// The list is moved out while it runs so delegates can take `&mut Widget`.
// Delegates added during the run land in the empty slot and are kept; a
// `clear` during the run drops the running list too.
macro_rules! fire {
    ($widget:expr, $kind:ident, $event:expr) => {{
        let mut observers = std::mem::take(&mut $widget.delegates.$kind);
        let handled = observers.notify($widget, $event);
        $widget.delegates.$kind.restore(observers);
        handled
    }};
}

/// A rectangular, drawable, hit-testable node.
///
/// Plain panels carry no components. A label adds [`Text`], a button adds
/// [`Text`] and [`Chrome`], a text box adds [`Text`] and [`Caret`].
pub struct Widget {
    rect: Rect,
    border_color: Color,
    background_color: Color,

    visible: bool,
    needs_layout: bool,
    mouse_over: bool,
    mouse_button_held: bool,
    can_focus: bool,
    has_focus: bool,

    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,

    delegates: Delegates,

    text: Option<Text>,
    chrome: Option<Chrome>,
    caret: Option<Caret>,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(1, 1, 0, 0),
            border_color: Color::TRANSPARENT,
            background_color: Color::CONTROL,
            visible: true,
            needs_layout: true,
            mouse_over: false,
            mouse_button_held: false,
            can_focus: false,
            has_focus: false,
            parent: None,
            children: Vec::new(),
            delegates: Delegates::default(),
            text: None,
            chrome: None,
            caret: None,
        }
    }

    pub fn with_rect(rect: Rect) -> Self {
        let mut widget = Self::new();
        widget.rect = rect;
        widget
    }

    pub fn with_colors(rect: Rect, border_color: Color, background_color: Color) -> Self {
        let mut widget = Self::with_rect(rect);
        widget.border_color = border_color;
        widget.background_color = background_color;
        widget
    }

    pub fn label(text: impl Into<String>) -> Self {
        let mut widget = Self::new();
        widget.text = Some(Text::label(text.into()));
        widget
    }

    pub fn button(text: impl Into<String>) -> Self {
        let mut widget = Self::label(text);
        widget.can_focus = true;
        widget.background_color = Color::CONTROL;
        widget.border_color = Color::BLACK_WOLF;
        if let Some(text) = widget.text.as_mut() {
            text.padding = Chrome::NORMAL_PADDING;
            text.color = Color::BLACK;
        }
        widget.chrome = Some(Chrome);
        widget
    }

    pub fn text_box() -> Self {
        let mut widget = Self::new();
        widget.rect.w = 100;
        widget.rect.h = 24;
        widget.background_color = Color::WHITE;
        widget.border_color = Color::BLACK;
        widget.can_focus = true;
        widget.text = Some(Text::field());
        widget.caret = Some(Caret::default());
        widget
    }

    // ---- geometry & style ----

    pub fn rect(&self) -> Rect { self.rect }
    pub fn x(&self) -> i32 { self.rect.x }
    pub fn y(&self) -> i32 { self.rect.y }
    pub fn width(&self) -> i32 { self.rect.w }
    pub fn height(&self) -> i32 { self.rect.h }
    pub fn border_color(&self) -> Color { self.border_color }
    pub fn background_color(&self) -> Color { self.background_color }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn needs_layout(&self) -> bool { self.needs_layout }
    pub fn is_mouse_over(&self) -> bool { self.mouse_over }
    pub fn is_mouse_button_held(&self) -> bool { self.mouse_button_held }
    pub fn can_focus(&self) -> bool { self.can_focus }
    pub fn has_focus(&self) -> bool { self.has_focus }

    pub fn parent(&self) -> Option<WidgetId> { self.parent }
    pub fn children(&self) -> &[WidgetId] { &self.children }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn set_x(&mut self, x: i32) {
        self.rect.x = x;
        self.set_needs_layout();
    }

    pub fn set_y(&mut self, y: i32) {
        self.rect.y = y;
        self.set_needs_layout();
    }

    pub fn set_width(&mut self, width: i32) {
        self.rect.w = width;
        self.set_needs_layout();
    }

    pub fn set_height(&mut self, height: i32) {
        self.rect.h = height;
        self.set_needs_layout();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.set_needs_layout();
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.set_needs_layout();
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.set_needs_layout();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.set_needs_layout();
    }

    pub fn set_can_focus(&mut self, can_focus: bool) {
        self.can_focus = can_focus;
        self.set_needs_layout();
    }

    pub(crate) fn focus(&mut self) {
        self.has_focus = true;
        self.set_needs_layout();
    }

    pub(crate) fn blur(&mut self) {
        self.has_focus = false;
        self.set_needs_layout();
    }

    // ---- text presentation ----

    pub fn is_text(&self) -> bool { self.text.is_some() }
    pub fn is_button(&self) -> bool { self.chrome.is_some() }
    pub fn is_text_box(&self) -> bool { self.caret.is_some() }

    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.content.as_str())
    }

    pub fn font(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.font.as_str())
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text.as_ref().map(|t| t.color)
    }

    pub fn padding(&self) -> Option<Padding> {
        self.text.as_ref().map(|t| t.padding)
    }

    pub fn autosize(&self) -> bool {
        self.text.as_ref().is_some_and(|t| t.autosize)
    }

    pub fn blink(&self) -> bool {
        self.text.as_ref().is_some_and(|t| t.blink)
    }

    /// Where the cached text texture is composited, in root space.
    pub fn text_draw_rect(&self) -> Option<Rect> {
        self.text.as_ref().map(|t| t.cache.draw_rect())
    }

    pub fn has_cached_text(&self) -> bool {
        self.text.as_ref().is_some_and(|t| t.cache.is_cached())
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        if let Some(text) = self.text.as_mut() {
            text.content = content.into();
        }
        self.set_needs_layout();
    }

    pub fn set_text_color(&mut self, color: Color) {
        if let Some(text) = self.text.as_mut() {
            text.color = color;
        }
        self.set_needs_layout();
    }

    /// Font keys are validated by `Ui::set_font`.
    pub(crate) fn set_font_unchecked(&mut self, font: &str) {
        if let Some(text) = self.text.as_mut() {
            text.font = font.to_string();
        }
        self.set_needs_layout();
    }

    pub fn set_autosize(&mut self, autosize: bool) {
        if let Some(text) = self.text.as_mut() {
            text.autosize = autosize;
        }
        self.set_needs_layout();
    }

    pub fn set_blink(&mut self, blink: bool) {
        if let Some(text) = self.text.as_mut() {
            text.blink = blink;
        }
        self.set_needs_layout();
    }

    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        if let Some(text) = self.text.as_mut() {
            text.h_align = align;
        }
        self.set_needs_layout();
    }

    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        if let Some(text) = self.text.as_mut() {
            text.v_align = align;
        }
        self.set_needs_layout();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if let Some(text) = self.text.as_mut() {
            text.padding = padding;
        }
        self.set_needs_layout();
    }

    // ---- caret ----

    pub fn caret(&self) -> Option<usize> {
        match (&self.caret, &self.text) {
            (Some(caret), Some(text)) => Some(caret.position(&text.content)),
            _ => None,
        }
    }

    pub fn set_caret(&mut self, position: usize) {
        if let (Some(caret), Some(text)) = (self.caret.as_mut(), self.text.as_ref()) {
            caret.set(position, &text.content);
        }
        self.set_needs_layout();
    }

    // ---- delegates ----

    pub fn delegates(&self) -> &Delegates {
        &self.delegates
    }

    pub fn delegates_mut(&mut self) -> &mut Delegates {
        &mut self.delegates
    }

    // ---- events ----

    /// Handles everything except pointer-down, which needs the tree for the
    /// focus request (see [`Widget::press`]).
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::KeyDown(ev) => {
                let edited = self.edit_key(ev.key);
                fire!(self, key_down, ev);
                edited
            }
            Event::KeyUp(ev) => {
                fire!(self, key_up, ev);
                false
            }
            Event::TextInput(ev) => {
                let edited = self.edit_text(&ev.text);
                fire!(self, text, ev);
                edited
            }
            Event::MouseMotion(ev) => {
                if self.rect.contains(ev.position) {
                    if !self.mouse_over {
                        self.mouse_over = true;
                        fire!(self, mouse_over, ev);
                    }
                } else if self.mouse_over {
                    self.mouse_over = false;
                    fire!(self, mouse_out, ev);
                }
                fire!(self, mouse_move, ev);
                false
            }
            Event::MouseButtonUp(ev) => {
                self.mouse_button_held = false;
                if self.rect.contains(ev.position) {
                    fire!(self, mouse_up, ev);
                }
                false
            }
            Event::MouseWheel(ev) => {
                if self.rect.contains(ev.position) {
                    fire!(self, mouse_wheel, ev);
                }
                false
            }
            Event::MouseButtonDown(_) | Event::Quit => false,
        }
    }

    /// First half of pointer-down. Returns whether the pointer hit us.
    pub(crate) fn press(&mut self, ev: &PointerEvent) -> bool {
        self.mouse_button_held = true;
        self.rect.contains(ev.position)
    }

    /// Second half of pointer-down, after the focus request.
    pub(crate) fn pressed(&mut self, ev: &PointerEvent) -> bool {
        fire!(self, mouse_down, ev);
        if self.has_focus {
            return self.place_caret(ev.position);
        }
        false
    }

    fn edit_key(&mut self, key: Key) -> bool {
        if !self.has_focus {
            return false;
        }
        let (Some(caret), Some(text)) = (self.caret.as_mut(), self.text.as_mut()) else {
            return false;
        };
        match caret.apply_key(&mut text.content, key) {
            CaretOutcome::Ignored => false,
            CaretOutcome::Moved => true,
            CaretOutcome::Edited => {
                self.set_needs_layout();
                true
            }
        }
    }

    fn edit_text(&mut self, input: &str) -> bool {
        if !self.has_focus {
            return false;
        }
        let (Some(caret), Some(text)) = (self.caret.as_mut(), self.text.as_mut()) else {
            return false;
        };
        caret.insert(&mut text.content, input);
        self.set_needs_layout();
        true
    }

    // Maps against the width of the text currently on screen. Events carry
    // no renderer, so edits since the last draw are not measured yet.
    fn place_caret(&mut self, click: Point) -> bool {
        let (Some(caret), Some(text)) = (self.caret.as_mut(), self.text.as_ref()) else {
            return false;
        };
        let start = self.rect.x + TEXT_INSET;
        let offset = (click.x - start).clamp(0, self.rect.w.max(0));
        caret.place(offset, text.cache.text_size().w, &text.content)
    }

    // ---- drawing ----

    /// Paints this widget only; the tree handles children. Returns false
    /// when the subtree must be skipped too: a blinking widget in its off
    /// phase hides its children, an invisible one does not.
    pub(crate) fn draw(&mut self, ctx: &mut DrawContext) -> bool {
        if !self.visible {
            return true;
        }
        if self.blink() && !ctx.blink_on() {
            return false;
        }

        if self.chrome.is_some() {
            self.apply_chrome();
        }

        if !self.background_color.is_transparent() {
            ctx.renderer.fill_rect(self.rect, self.background_color);
        }
        if !self.border_color.is_transparent() {
            ctx.renderer.draw_border(self.rect, self.border_color);
        }

        if self.needs_layout {
            self.layout(ctx);
        }

        if let Some(text) = &self.text {
            text.paint(ctx);
        }

        if let Some(chrome) = &self.chrome {
            chrome.paint(ctx.renderer, self.rect, self.border_color, self.is_pressed());
        }

        if self.has_focus && ctx.blink_on() {
            self.paint_caret(ctx);
        }
        true
    }

    fn is_pressed(&self) -> bool {
        self.mouse_over && self.mouse_button_held
    }

    fn apply_chrome(&mut self) {
        let (border, padding) = Chrome::style(self.is_pressed());
        if self.border_color != border {
            self.set_border_color(border);
        }
        if self.padding().is_some_and(|p| p != padding) {
            self.set_padding(padding);
        }
    }

    /// The dirty pass. Regenerates cached text and, for labels, the
    /// autosize/padding/alignment geometry.
    pub(crate) fn layout(&mut self, ctx: &mut DrawContext) {
        let Widget { rect, text, caret, needs_layout, .. } = self;
        let Some(text) = text.as_mut() else {
            *needs_layout = false;
            return;
        };

        if caret.is_some() {
            if text.content.is_empty() {
                text.cache.clear();
                *needs_layout = false;
                return;
            }
            let Some(size) = text.refresh(ctx) else {
                return;
            };
            text.cache.set_draw_rect(Rect::new(
                rect.x + TEXT_INSET,
                rect.y + (rect.h - size.h) / 2,
                size.w,
                size.h,
            ));
            *needs_layout = false;
            return;
        }

        if text.content.is_empty() {
            // Geometry from the last non-empty text is left as is and the
            // widget stays dirty.
            text.cache.release();
            return;
        }
        let Some(size) = text.refresh(ctx) else {
            return;
        };
        text.layout_label(rect, size);
        *needs_layout = false;
    }

    fn paint_caret(&self, ctx: &mut DrawContext) {
        let (Some(caret), Some(text)) = (&self.caret, &self.text) else {
            return;
        };
        let position = caret.position(&text.content);
        let prefix: String = text.content.chars().take(position).collect();
        let width = if prefix.is_empty() {
            0
        } else {
            let Some(font) = ctx.fonts.get(&text.font) else {
                return;
            };
            match ctx.renderer.measure_text(font, &prefix) {
                Some(size) => size.w,
                None => return,
            }
        };
        let x = self.rect.x + TEXT_INSET + width;
        ctx.renderer.draw_line(
            Point::new(x, self.rect.y + 3),
            Point::new(x, self.rect.y + self.rect.h - 4),
            text.color,
        );
    }
}
