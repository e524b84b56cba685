mod common;

use common::{frame, ui_with_fonts, MockRenderer};
use fox_ui::{Chrome, Color, Event, Padding, Point, Rect, Widget};

#[test]
fn button_defaults() {
    let button = Widget::button("Button");
    assert!(button.is_button());
    assert!(button.can_focus());
    assert_eq!(button.padding(), Some(Padding::symmetric(5, 25)));
    assert_eq!(button.border_color(), Color::BLACK_WOLF);
    assert_eq!(button.background_color(), Color::CONTROL);
}

#[test]
fn pressing_swaps_border_and_padding() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = ui.add(Widget::button("OK"));
    frame(&mut ui, &mut renderer, 0);
    let rect = ui.widget(id).unwrap().rect();
    let inside = (rect.x + 2, rect.y + 2);

    ui.handle_event(&Event::motion(inside.0, inside.1));
    ui.handle_event(&Event::mouse_down(inside.0, inside.1));
    frame(&mut ui, &mut renderer, 0);

    let button = ui.widget(id).unwrap();
    assert_eq!(button.border_color(), Color::DARK_GREY);
    assert_eq!(button.padding(), Some(Chrome::PRESSED_PADDING));

    ui.handle_event(&Event::mouse_up(inside.0, inside.1));
    frame(&mut ui, &mut renderer, 0);
    let button = ui.widget(id).unwrap();
    assert_eq!(button.border_color(), Color::BLACK_WOLF);
    assert_eq!(button.padding(), Some(Chrome::NORMAL_PADDING));
}

#[test]
fn idle_button_is_not_relaid_every_frame() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = ui.add(Widget::button("OK"));
    frame(&mut ui, &mut renderer, 0);
    frame(&mut ui, &mut renderer, 16);
    assert!(!ui.widget(id).unwrap().needs_layout());
    assert_eq!(renderer.rasterized, 1);
}

#[test]
fn normal_bevel_ends_with_border_colored_edges() {
    let mut renderer = MockRenderer::new();
    Chrome.paint(&mut renderer, Rect::new(0, 0, 20, 10), Color::BLACK_WOLF, false);
    let lines = renderer.lines();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], (Point::new(1, 1), Point::new(17, 1), Color::LIGHT_GREY));
    assert_eq!(lines[6], (Point::new(18, 1), Point::new(18, 8), Color::BLACK_WOLF));
    assert_eq!(lines[7], (Point::new(1, 8), Point::new(18, 8), Color::BLACK_WOLF));
}

#[test]
fn pressed_bevel_inverts_the_light() {
    let mut renderer = MockRenderer::new();
    Chrome.paint(&mut renderer, Rect::new(0, 0, 20, 10), Color::DARK_GREY, true);
    let colors: Vec<Color> = renderer.lines().into_iter().map(|(_, _, c)| c).collect();

    assert_eq!(
        colors,
        vec![
            Color::GREY,
            Color::GREY,
            Color::DARK_GREY,
            Color::DARK_GREY,
            Color::LIGHT_GREY,
            Color::LIGHT_GREY,
        ]
    );
}
