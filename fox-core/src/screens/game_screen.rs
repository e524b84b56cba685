use fox_ui::{Color, HorizontalAlign, Rect, Ui, UiRenderer, Widget, WidgetId};

use super::{text, Screen, ScreenCtx, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::calendar;
use crate::event::Command;
use crate::tools::commafy;

const HEADER_RED: Color = Color::rgb(100, 0, 0);
const FOOTER_GREY: Color = Color::rgb(200, 200, 200);
const DATE_RED: Color = Color::rgb(128, 0, 0);
pub const LIGHT_GREEN: Color = Color::rgb(0, 255, 0);
pub const DARK_GREEN: Color = Color::rgb(0, 128, 0);
pub const LIGHT_BLUE: Color = Color::rgb(0, 0, 255);

pub const BAR_HEIGHT: i32 = 26;
pub const ROWS_PER_COLUMN: usize = 35;
pub const COLUMN_WIDTH: i32 = 125;
pub const ROW_HEIGHT: i32 = 14;
const LIST_TOP: i32 = 55;
const MARGIN: i32 = 10;

/// Where the `index`-th galaxy entry goes in the listing.
pub fn galaxy_slot(index: usize) -> (i32, i32) {
    let col = (index / ROWS_PER_COLUMN) as i32;
    let row = (index % ROWS_PER_COLUMN) as i32;
    (col * COLUMN_WIDTH + MARGIN, LIST_TOP + row * ROW_HEIGHT)
}

pub fn galaxy_entry(index: usize, name: &str) -> String {
    format!("{:03}: {}", index + 1, name)
}

/// Fixed-width, right-aligned readout so its right edge never moves.
fn right_readout(ui: &mut Ui, font: &str, color: Color, rect: Rect) -> WidgetId {
    let id = text(ui, "", font, color);
    if let Some(widget) = ui.widget_mut(id) {
        widget.set_autosize(false);
        widget.set_horizontal_align(HorizontalAlign::Right);
        widget.set_rect(rect);
    }
    id
}

fn live(ui: &mut Ui, id: Option<WidgetId>) -> Option<&mut Widget> {
    ui.widget_mut(id?)
}

#[derive(Debug, Default)]
pub struct GameScreen {
    credits: Option<WidgetId>,
    date: Option<WidgetId>,
    selected: Option<WidgetId>,
    galaxies: Vec<WidgetId>,
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn galaxy_labels(&self) -> &[WidgetId] {
        &self.galaxies
    }

    pub fn credits_label(&self) -> Option<WidgetId> {
        self.credits
    }

    pub fn date_label(&self) -> Option<WidgetId> {
        self.date
    }

    pub fn selected_label(&self) -> Option<WidgetId> {
        self.selected
    }

    fn build_header(&mut self, ui: &mut Ui, area: Rect, universe_name: &str) {
        let header = ui.add(Widget::with_colors(area, Color::TRANSPARENT, HEADER_RED));

        let name = text(ui, universe_name, "light_small_caps_24", Color::WHITE);
        if let Some(widget) = ui.widget_mut(name) {
            widget.set_x(area.x + MARGIN);
            widget.set_y(area.y);
        }
        ui.add_panel(header, name);

        let credits = right_readout(
            ui,
            "regular_16",
            Color::WHITE,
            Rect::new(area.right() - 310, area.y + 5, 300, 16),
        );
        ui.add_panel(header, credits);
        self.credits = Some(credits);
    }

    fn build_footer(&mut self, ui: &mut Ui, area: Rect, pilot: &str) {
        let footer = ui.add(Widget::with_colors(area, Color::TRANSPARENT, FOOTER_GREY));

        let name = text(ui, &format!("PILOT: {}", pilot), "bold_24", Color::BLACK);
        if let Some(widget) = ui.widget_mut(name) {
            widget.set_x(area.x + MARGIN);
            widget.set_y(area.y);
        }
        ui.add_panel(footer, name);

        let date = right_readout(
            ui,
            "bold_24",
            DATE_RED,
            Rect::new(area.right() - 510, area.y, 500, BAR_HEIGHT),
        );
        ui.add_panel(footer, date);
        self.date = Some(date);
    }

    fn build_listing(&mut self, ui: &mut Ui, ctx: &ScreenCtx, names: &[String]) {
        let heading = text(ui, "Current Galaxies:", "regular_16", LIGHT_GREEN);
        if let Some(widget) = ui.widget_mut(heading) {
            widget.set_x(MARGIN);
            widget.set_y(30);
        }
        ui.add_root(heading);

        self.galaxies.clear();
        for (i, name) in names.iter().enumerate() {
            let id = text(ui, &galaxy_entry(i, name), "regular_12", DARK_GREEN);
            let commands = ctx.commands.clone();
            if let Some(widget) = ui.widget_mut(id) {
                let (x, y) = galaxy_slot(i);
                widget.set_x(x);
                widget.set_y(y);

                let d = widget.delegates_mut();
                d.mouse_over.add(|w, _| {
                    let color = if w.is_mouse_button_held() { LIGHT_BLUE } else { LIGHT_GREEN };
                    w.set_text_color(color);
                    false
                });
                d.mouse_out.add(|w, _| {
                    w.set_text_color(DARK_GREEN);
                    false
                });
                d.mouse_down.add(|w, _| {
                    w.set_text_color(LIGHT_BLUE);
                    false
                });
                d.mouse_up.add(move |w, _| {
                    w.set_text_color(LIGHT_GREEN);
                    commands.push(Command::SelectGalaxy(i));
                    false
                });
            }
            ui.add_root(id);
            self.galaxies.push(id);
        }

        let selected = text(ui, "", "regular_16", Color::WHITE);
        if let Some(widget) = ui.widget_mut(selected) {
            widget.set_x(4 * COLUMN_WIDTH + 3 * MARGIN);
            widget.set_y(LIST_TOP);
        }
        ui.add_root(selected);
        self.selected = Some(selected);
    }
}

impl Screen for GameScreen {
    fn build(&mut self, ui: &mut Ui, _renderer: &mut dyn UiRenderer, ctx: &ScreenCtx) {
        let Some(session) = ctx.session else {
            log::warn!("Game screen built without a session");
            return;
        };

        let screen = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        let (header, body) = screen.split_top(BAR_HEIGHT);
        let (footer, _) = body.split_bottom(BAR_HEIGHT);

        let names: Vec<String> = session.universe.galaxies().iter().map(|g| g.name().to_string()).collect();
        self.build_listing(ui, ctx, &names);
        self.build_header(ui, header, session.universe.name());
        self.build_footer(ui, footer, session.player.name());

        self.update(ui, ctx);
    }

    fn update(&mut self, ui: &mut Ui, ctx: &ScreenCtx) {
        let Some(session) = ctx.session else {
            return;
        };
        let universe = &session.universe;
        let player = &session.player;

        if let Some(widget) = live(ui, self.credits) {
            let credits = format!("{} cr", commafy(player.credits()));
            if widget.text() != Some(credits.as_str()) {
                widget.set_text(credits);
            }
        }

        if let Some(widget) = live(ui, self.date) {
            let colon = (ctx.now_ms / 500) % 2 == 0;
            let stamp = universe.date().stamp(calendar::minutes(ctx.now_ms), colon);
            if widget.text() != Some(stamp.as_str()) {
                widget.set_text(stamp);
            }
        }

        if let Some(widget) = live(ui, self.selected) {
            let index = player.galaxy_index();
            let readout = match universe.galaxy(index) {
                Some(galaxy) => format!("Galaxy #{} {} ({} systems)", index + 1, galaxy.name(), galaxy.systems().len()),
                None => String::from("No galaxy selected"),
            };
            if widget.text() != Some(readout.as_str()) {
                widget.set_text(readout);
            }
        }
    }
}
