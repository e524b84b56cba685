use crate::renderer::UiRenderer;
use crate::{Color, Padding, Point, Rect};

/// Bevelled push-button chrome layered over a label.
///
/// The pressed look shifts the text one pixel down and right through the
/// padding and swaps the light and dark bevel edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome;

impl Chrome {
    pub const NORMAL_PADDING: Padding = Padding::symmetric(5, 25);
    pub const PRESSED_PADDING: Padding = Padding::new(6, 24, 4, 26);

    /// Border color and text padding for the given state.
    pub fn style(pressed: bool) -> (Color, Padding) {
        if pressed {
            (Color::DARK_GREY, Self::PRESSED_PADDING)
        } else {
            (Color::BLACK_WOLF, Self::NORMAL_PADDING)
        }
    }

    pub fn paint(&self, renderer: &mut dyn UiRenderer, rect: Rect, border: Color, pressed: bool) {
        let Rect { x, y, w, h } = rect;
        let mut line = |x1, y1, x2, y2, color| {
            renderer.draw_line(Point::new(x1, y1), Point::new(x2, y2), color);
        };

        if pressed {
            line(x + w - 1, y, x + w - 1, y + h - 1, Color::GREY);
            line(x, y + h - 1, x + w - 2, y + h - 1, Color::GREY);

            line(x + 1, y + 1, x + w - 3, y + 1, Color::DARK_GREY);
            line(x + 1, y + 2, x + 1, y + h - 3, Color::DARK_GREY);

            line(x + w - 2, y + 1, x + w - 2, y + h - 2, Color::LIGHT_GREY);
            line(x + 1, y + h - 2, x + w - 2, y + h - 2, Color::LIGHT_GREY);
        } else {
            line(x + 1, y + 1, x + w - 3, y + 1, Color::LIGHT_GREY);
            line(x + 1, y + 2, x + 1, y + h - 3, Color::LIGHT_GREY);

            line(x + 2, y + 2, x + w - 4, y + 2, Color::GREY);
            line(x + 2, y + 2, x + 2, y + h - 4, Color::GREY);

            line(x + w - 3, y + 2, x + w - 3, y + h - 3, Color::DARK_GREY);
            line(x + 2, y + h - 3, x + w - 3, y + h - 3, Color::DARK_GREY);

            line(x + w - 2, y + 1, x + w - 2, y + h - 2, border);
            line(x + 1, y + h - 2, x + w - 2, y + h - 2, border);
        }
    }
}
