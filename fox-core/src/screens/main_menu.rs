use fox_ui::{Color, Rect, Ui, UiRenderer, Widget, WidgetId};

use super::{center, text, Screen, ScreenCtx, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::event::Command;

pub const TITLE: &str = "Fox Trader";
pub const TAGLINE: &str = "A cunning game about foxes and space";
pub const START_HINT: &str = "Press SPACE BAR to start";
pub const COPYRIGHT: &str = "Copyright 2015-2017 Fox Council";

const COPYRIGHT_GREY: Color = Color::rgb(0xAA, 0xAA, 0xAA);

#[derive(Debug, Default)]
pub struct MainMenuScreen {
    pilot_box: Option<WidgetId>,
    start_button: Option<WidgetId>,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pilot_box(&self) -> Option<WidgetId> {
        self.pilot_box
    }

    pub fn start_button(&self) -> Option<WidgetId> {
        self.start_button
    }
}

impl Screen for MainMenuScreen {
    fn build(&mut self, ui: &mut Ui, renderer: &mut dyn UiRenderer, ctx: &ScreenCtx) {
        let now = ctx.now_ms;

        let title = text(ui, TITLE, "bold_small_caps_96", Color::RED);
        center(ui, renderer, title, 28, now);
        ui.add_root(title);

        let tagline = text(ui, TAGLINE, "regular_24", Color::WHITE);
        center(ui, renderer, tagline, 118, now);
        ui.add_root(tagline);

        let pilot_label = text(ui, "Pilot name:", "regular_16", Color::WHITE);
        if let Some(label) = ui.widget_mut(pilot_label) {
            label.set_x(SCREEN_WIDTH / 2 - 130);
            label.set_y(183);
        }
        ui.add_root(pilot_label);

        let mut pilot_box = Widget::text_box();
        pilot_box.set_rect(Rect::new(SCREEN_WIDTH / 2 - 20, 180, 150, 24));
        self.pilot_box = Some(ui.add(pilot_box));

        let button = ui.create(Widget::button("OK"));
        ui.set_font(button, "bold_64");
        ui.layout_now(button, renderer, now);
        if let Some(widget) = ui.widget_mut(button) {
            let (w, h) = (widget.width(), widget.height());
            widget.set_x(SCREEN_WIDTH / 2 - w / 2);
            widget.set_y(SCREEN_HEIGHT / 2 - h / 2);

            let commands = ctx.commands.clone();
            widget.delegates_mut().mouse_up.add(move |_, _| {
                commands.push(Command::StartGame);
                false
            });
        }
        ui.add_root(button);
        self.start_button = Some(button);

        let hint = text(ui, START_HINT, "regular_24", Color::WHITE);
        if let Some(widget) = ui.widget_mut(hint) {
            widget.set_blink(true);
        }
        center(ui, renderer, hint, 420, now);
        ui.add_root(hint);

        let copyright = text(ui, COPYRIGHT, "light_16", COPYRIGHT_GREY);
        center(ui, renderer, copyright, 550, now);
        ui.add_root(copyright);
    }

    fn pilot_name(&self, ui: &Ui) -> Option<String> {
        let text = ui.widget(self.pilot_box?)?.text()?.trim();
        if text.is_empty() {
            return None;
        }
        Some(text.to_string())
    }
}
