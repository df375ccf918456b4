use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use flyout_dom::{resolve, Element, Event, Key, LayoutResult, Modifiers, MouseButton, Rect};

fn screen() -> (Element, LayoutResult) {
    let root = Element::box_()
        .id("root")
        .child(Element::button("Open").id("button"));

    let mut layout = LayoutResult::new();
    layout.insert("root".into(), Rect::new(0, 0, 80, 24));
    layout.insert("button".into(), Rect::new(2, 1, 10, 1));
    (root, layout)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_key_press_targets_focused() {
    let (root, layout) = screen();
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    assert_eq!(
        resolve(&raw, Some("button"), &layout, &root),
        Some(Event::key("button", Key::Enter))
    );
}

#[test]
fn test_key_without_focus_has_no_target() {
    let (root, layout) = screen();
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::SHIFT));

    let event = resolve(&raw, None, &layout, &root).unwrap();
    assert_eq!(event.target(), None);
    match event {
        Event::Key { key, modifiers, .. } => {
            assert_eq!(key, Key::Char(' '));
            assert!(modifiers.shift);
            assert!(!modifiers.none());
        }
        other => panic!("expected key event, got {other:?}"),
    }
}

#[test]
fn test_key_release_is_dropped() {
    let (root, layout) = screen();
    let raw = CtEvent::Key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));

    assert_eq!(resolve(&raw, Some("button"), &layout, &root), None);
}

#[test]
fn test_mouse_down_is_hit_tested() {
    let (root, layout) = screen();

    let on_button = resolve(&mouse(MouseEventKind::Down(CtButton::Left), 3, 1), None, &layout, &root);
    assert_eq!(
        on_button,
        Some(Event::Click {
            target: Some("button".into()),
            x: 3,
            y: 1,
            button: MouseButton::Left,
        })
    );

    let empty = resolve(&mouse(MouseEventKind::Down(CtButton::Right), 40, 10), None, &layout, &root)
        .unwrap();
    assert_eq!(empty.target(), None);
}

#[test]
fn test_other_mouse_events_are_dropped() {
    let (root, layout) = screen();
    assert_eq!(
        resolve(&mouse(MouseEventKind::Up(CtButton::Left), 3, 1), None, &layout, &root),
        None
    );
    assert_eq!(resolve(&mouse(MouseEventKind::Moved, 3, 1), None, &layout, &root), None);
    assert_eq!(resolve(&CtEvent::Resize(80, 24), None, &layout, &root), None);
}

#[test]
fn test_key_conversion() {
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::BackTab), Key::BackTab);
    assert_eq!(Key::from(KeyCode::F(5)), Key::Other);

    assert!(Key::Enter.is_activation());
    assert!(Key::Char(' ').is_activation());
    assert!(!Key::Char('x').is_activation());
    assert!(!Key::Escape.is_activation());
}

#[test]
fn test_modifier_conversion() {
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::ALT);
    assert!(mods.ctrl && mods.alt && !mods.shift);
    assert!(Modifiers::default().none());
}

#[test]
fn test_event_target() {
    assert_eq!(Event::click("a").target(), Some("a"));
    assert_eq!(Event::Focus { target: "b".into() }.target(), Some("b"));
}
