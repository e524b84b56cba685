mod common;

use common::{frame, ui_with_fonts, MockRenderer};
use fox_ui::{Caret, Color, Event, Key, Rect, Widget};

fn focused_box(ui: &mut fox_ui::Ui) -> fox_ui::WidgetId {
    let id = ui.add(Widget::text_box());
    ui.widget_mut(id).unwrap().set_rect(Rect::new(10, 10, 100, 24));
    assert!(ui.request_focus(id));
    id
}

#[test]
fn text_box_defaults() {
    let tb = Widget::text_box();
    assert_eq!(tb.rect().w, 100);
    assert_eq!(tb.rect().h, 24);
    assert_eq!(tb.background_color(), Color::WHITE);
    assert_eq!(tb.border_color(), Color::BLACK);
    assert_eq!(tb.text(), Some(""));
    assert_eq!(tb.caret(), Some(0));
    assert!(tb.can_focus());
}

#[test]
fn typing_and_editing_round_trip() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);

    assert!(ui.handle_event(&Event::text("F")));
    assert!(ui.handle_event(&Event::text("o")));
    assert!(ui.handle_event(&Event::text("x")));
    assert_eq!(ui.widget(id).unwrap().text(), Some("Fox"));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(3));

    ui.handle_event(&Event::key_down(Key::Left));
    assert!(ui.handle_event(&Event::key_down(Key::Backspace)));
    assert_eq!(ui.widget(id).unwrap().text(), Some("Fx"));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(1));

    ui.handle_event(&Event::key_down(Key::Home));
    assert!(ui.handle_event(&Event::key_down(Key::Delete)));
    assert_eq!(ui.widget(id).unwrap().text(), Some("x"));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(0));

    assert!(!ui.handle_event(&Event::key_down(Key::Backspace)));
    ui.handle_event(&Event::key_down(Key::End));
    assert!(!ui.handle_event(&Event::key_down(Key::Delete)));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(1));
}

#[test]
fn unfocused_text_box_ignores_input() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = ui.add(Widget::text_box());

    assert!(!ui.handle_event(&Event::text("nope")));
    assert!(!ui.handle_event(&Event::key_down(Key::Backspace)));
    assert_eq!(ui.widget(id).unwrap().text(), Some(""));
}

#[test]
fn multibyte_text_is_edited_by_character() {
    let mut text = String::from("Füx");
    let mut caret = Caret::default();
    caret.set(2, &text);
    assert!(caret.backspace(&mut text));
    assert_eq!(text, "Fx");
    caret.insert(&mut text, "öö");
    assert_eq!(text, "Fööx");
    assert_eq!(caret.position(&text), 3);
}

#[test]
fn caret_is_clamped_after_external_text_change() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);
    ui.handle_event(&Event::text("Foxtrot"));

    ui.widget_mut(id).unwrap().set_text("Fo");
    assert_eq!(ui.widget(id).unwrap().caret(), Some(2));
    ui.handle_event(&Event::text("x"));
    assert_eq!(ui.widget(id).unwrap().text(), Some("Fox"));
}

#[test]
fn click_past_the_text_moves_caret_to_end() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);
    ui.handle_event(&Event::text("Fox"));
    ui.handle_event(&Event::key_down(Key::Home));
    frame(&mut ui, &mut renderer, 0);

    // "Fox" is 18px wide and starts at x = 14
    ui.handle_event(&Event::mouse_down(20, 15));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(0));

    ui.handle_event(&Event::mouse_down(90, 15));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(3));
}

#[test]
fn click_outside_the_box_keeps_caret_and_focus() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);
    ui.handle_event(&Event::text("Fox"));
    ui.handle_event(&Event::key_down(Key::Home));
    frame(&mut ui, &mut renderer, 0);

    // box spans x 10..110, y 10..34
    for (x, y) in [(500, 500), (111, 15), (20, 40), (5, 15)] {
        ui.handle_event(&Event::mouse_down(x, y));
        ui.handle_event(&Event::mouse_up(x, y));
        assert_eq!(ui.widget(id).unwrap().caret(), Some(0), "click at ({}, {})", x, y);
    }
    assert_eq!(ui.focused(), Some(id));
}

#[test]
fn click_maps_against_the_width_on_screen() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);
    ui.handle_event(&Event::text("Fox"));
    frame(&mut ui, &mut renderer, 0);

    // "Foxtrot" will be 42px wide, but until the next draw 18px are shown
    ui.handle_event(&Event::text("trot"));
    ui.handle_event(&Event::key_down(Key::Home));
    ui.handle_event(&Event::mouse_down(14 + 30, 15));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(7));

    ui.handle_event(&Event::key_down(Key::Home));
    frame(&mut ui, &mut renderer, 0);
    ui.handle_event(&Event::mouse_down(14 + 30, 15));
    assert_eq!(ui.widget(id).unwrap().caret(), Some(0));
}

#[test]
fn text_is_inset_and_vertically_centered() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    let id = focused_box(&mut ui);
    ui.handle_event(&Event::text("Fox"));
    frame(&mut ui, &mut renderer, 0);

    assert_eq!(ui.widget(id).unwrap().text_draw_rect(), Some(Rect::new(14, 16, 18, 12)));
    assert_eq!(ui.widget(id).unwrap().rect(), Rect::new(10, 10, 100, 24));
}

#[test]
fn focused_box_draws_caret_at_prefix_width() {
    let mut renderer = MockRenderer::new();
    let (mut ui, _) = ui_with_fonts(&mut renderer);
    focused_box(&mut ui);
    ui.handle_event(&Event::text("Fox"));
    ui.handle_event(&Event::key_down(Key::Left));

    frame(&mut ui, &mut renderer, 0);
    let lines = renderer.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 14 + 12);

    renderer.take_ops();
    frame(&mut ui, &mut renderer, 260);
    assert!(renderer.lines().is_empty());
}
