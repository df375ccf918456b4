//! Drives a dropdown with a fixed script of terminal input, no terminal needed.
//!
//! Run with `cargo run -p flyout --example scripted`; transitions are logged
//! to `scripted.log`.

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use flyout::logging::{LevelFilter, init_file_logger};
use flyout::prelude::*;
use flyout_dom::resolve;

const SCREEN: Rect = Rect::new(0, 0, 80, 24);
const ANCHOR: Rect = Rect::new(4, 2, 16, 1);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_file_logger("scripted.log", LevelFilter::Debug)?;

    let router = OutsideClickRouter::new();
    let mut dropdown = Dropdown::new("Account")
        .id("account")
        .placement(Placement::BottomStart)
        .header(DropdownHeader::new().line("Bonnie Green").line("name@flowbite.com"))
        .item(DropdownItem::new("Dashboard").on_select(|sel| println!("  -> selected {}", sel.label)))
        .item(DropdownItem::new("Settings").icon("⚙"))
        .item(DropdownItem::new("Earnings").disabled())
        .divider()
        .item(DropdownItem::new("Sign out"));

    dropdown.mount(&router);
    dropdown.reposition(ANCHOR, &AnchoredPositioner::new(SCREEN))?;

    let script = [
        ("click trigger", mouse(5, 2)),
        ("click header", mouse(5, 3)),
        ("click Dashboard", mouse(5, 5)),
        ("press enter on trigger", key(KeyCode::Enter)),
        ("click empty space", mouse(60, 20)),
        ("press space on trigger", key(KeyCode::Char(' '))),
        ("press escape", key(KeyCode::Esc)),
    ];

    let focused = dropdown.button_id();
    for (step, raw) in script {
        let (root, layout) = frame(&dropdown);
        let Some(event) = resolve(&raw, Some(&focused), &layout, &root) else {
            continue;
        };

        // Outside detection sees the click before the widget reacts to it
        router.dispatch_event(&root, &layout, &event);
        let result = dropdown.handle_event(&event);

        println!("{step:<24} {:?} {:?}", result, dropdown.visibility());
        dropdown.controller().clear_dirty();
    }

    dropdown.unmount();
    Ok(())
}

fn frame(dropdown: &Dropdown) -> (Element, LayoutResult) {
    let root = Element::box_().id("app").child(dropdown.build());
    let mut layout = LayoutResult::new();
    layout.insert("app".into(), SCREEN);
    dropdown.layout(ANCHOR, &mut layout);
    (root, layout)
}

fn mouse(column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> CtEvent {
    CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
