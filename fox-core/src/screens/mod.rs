pub mod game_screen;
pub mod main_menu;

pub use game_screen::GameScreen;
pub use main_menu::MainMenuScreen;

use fox_ui::{Color, Padding, Ui, UiRenderer, Widget, WidgetId};

use crate::event::CommandQueue;
use crate::game::Session;

pub const SCREEN_WIDTH: i32 = 1024;
pub const SCREEN_HEIGHT: i32 = 576;

/// What a screen may look at while it builds or refreshes its widgets.
pub struct ScreenCtx<'a> {
    pub session: Option<&'a Session>,
    pub commands: &'a CommandQueue,
    pub now_ms: u64,
}

/// One game state's widget tree.
pub trait Screen {
    /// Creates the widgets. Called once per screen, from inside the frame
    /// after the first (empty) draw.
    fn build(&mut self, ui: &mut Ui, renderer: &mut dyn UiRenderer, ctx: &ScreenCtx);

    /// Refreshes live widgets once per game tick.
    fn update(&mut self, _ui: &mut Ui, _ctx: &ScreenCtx) {}

    /// Pilot name typed on this screen, if any.
    fn pilot_name(&self, _ui: &Ui) -> Option<String> {
        None
    }
}

/// Plain readout text: transparent background, no padding.
pub(crate) fn text(ui: &mut Ui, content: &str, font: &str, color: Color) -> WidgetId {
    let mut label = Widget::label(content);
    label.set_background_color(Color::TRANSPARENT);
    label.set_padding(Padding::zero());
    label.set_text_color(color);
    let id = ui.create(label);
    ui.set_font(id, font);
    id
}

/// Lays the widget out right away and centers it horizontally at `y`.
pub(crate) fn center(ui: &mut Ui, renderer: &mut dyn UiRenderer, id: WidgetId, y: i32, now_ms: u64) {
    ui.layout_now(id, renderer, now_ms);
    if let Some(widget) = ui.widget_mut(id) {
        let width = widget.width();
        widget.set_x(SCREEN_WIDTH / 2 - width / 2);
        widget.set_y(y);
    }
}
