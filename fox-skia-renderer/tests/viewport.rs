use fox_skia_renderer::renderer::{blit, convert_key, Viewport};
use fox_ui::Key;
use winit::keyboard::{Key as WinitKey, NamedKey};

#[test]
fn design_size_maps_one_to_one() {
    let view = Viewport::fit(1024, 576);
    assert_eq!(view.scale, 1.0);
    assert_eq!(view.to_logical(512.0, 288.0), (512, 288));
}

#[test]
fn wide_window_is_pillarboxed() {
    let view = Viewport::fit(2048 + 200, 1152);
    assert_eq!(view.scale, 2.0);
    assert_eq!(view.off_x, 100.0);
    assert_eq!(view.off_y, 0.0);
    assert_eq!(view.to_logical(100.0, 0.0), (0, 0));
    assert_eq!(view.to_logical(2147.0, 1151.0), (1023, 575));
}

#[test]
fn blit_scales_and_fills_bars() {
    let frame = vec![0x00AB_CDEF_u32; 1024 * 576];
    let (w, h) = (1024 * 2, 576 * 2 + 20);
    let mut dest = vec![0xFFFF_FFFF_u32; (w * h) as usize];
    blit(&frame, &mut dest, w, h);

    // 10 px letterbox bars top and bottom
    assert!(dest[..(w * 10) as usize].iter().all(|px| *px == 0));
    assert_eq!(dest[(w * 10) as usize], 0x00AB_CDEF);
    assert_eq!(dest[(w * (h - 11)) as usize], 0x00AB_CDEF);
    assert!(dest[(w * (h - 10)) as usize..].iter().all(|px| *px == 0));
}

#[test]
fn keys_translate() {
    assert_eq!(convert_key(&WinitKey::Named(NamedKey::Space)), Key::Space);
    assert_eq!(convert_key(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
    assert_eq!(convert_key(&WinitKey::Named(NamedKey::Backspace)), Key::Backspace);
    assert_eq!(convert_key(&WinitKey::Named(NamedKey::Enter)), Key::Return);
    assert_eq!(convert_key(&WinitKey::Character("Q".into())), Key::Char('q'));
    assert_eq!(convert_key(&WinitKey::Character(" ".into())), Key::Space);
    assert_eq!(convert_key(&WinitKey::Named(NamedKey::F1)), Key::Unknown);
}
