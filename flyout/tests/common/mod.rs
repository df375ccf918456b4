//! Test host: renders a dropdown next to an unrelated button and routes
//! input the way a real host would (outside-click router first, then the
//! widget).

#![allow(dead_code)]

use flyout::{AnchoredPositioner, Dropdown, OutsideClickRouter, PANEL_TEST_ID};
use flyout_dom::element::{closest_clickable, find_all_by_role, find_by_test_id, find_by_text, find_element};
use flyout_dom::{hit_test, Element, Event, Key, LayoutResult, MouseButton, Rect, Role};

pub const SCREEN: Rect = Rect::new(0, 0, 80, 24);
pub const ANCHOR: Rect = Rect::new(2, 1, 20, 1);
pub const ELSEWHERE: Rect = Rect::new(60, 20, 10, 1);

pub struct Screen {
    pub dropdown: Dropdown,
    pub router: OutsideClickRouter,
    pub root: Element,
    pub layout: LayoutResult,
}

impl Screen {
    /// Mount, position and build `dropdown`.
    pub fn render(mut dropdown: Dropdown) -> Self {
        let router = OutsideClickRouter::new();
        dropdown.mount(&router);
        dropdown
            .reposition(ANCHOR, &AnchoredPositioner::new(SCREEN))
            .expect("anchor is on screen");

        let mut screen = Self {
            dropdown,
            router,
            root: Element::box_(),
            layout: LayoutResult::new(),
        };
        screen.rerender();
        screen
    }

    pub fn rerender(&mut self) {
        self.root = Element::box_()
            .id("app")
            .child(Element::button("Elsewhere").id("elsewhere"))
            .child(self.dropdown.build());

        self.layout = LayoutResult::new();
        self.layout.insert("app".into(), SCREEN);
        self.layout.insert("elsewhere".into(), ELSEWHERE);
        self.dropdown.layout(ANCHOR, &mut self.layout);
    }

    /// The one button inside the dropdown.
    pub fn button(&self) -> &Element {
        let dropdown = find_element(&self.root, self.dropdown.id_str()).expect("dropdown rendered");
        let buttons = find_all_by_role(dropdown, Role::Button);
        assert_eq!(buttons.len(), 1, "expected exactly one button, got {buttons:?}");
        buttons[0]
    }

    pub fn panel(&self) -> &Element {
        find_by_test_id(&self.root, PANEL_TEST_ID).expect("panel rendered")
    }

    pub fn panel_is_invisible(&self) -> bool {
        self.panel().has_class(flyout_dom::INVISIBLE)
    }

    /// Click the element `id`, or its nearest clickable ancestor.
    pub fn click(&mut self, id: &str) {
        let target = closest_clickable(&self.root, id)
            .map(|el| el.id.clone())
            .unwrap_or_else(|| id.to_string());
        self.send(Event::click(target));
    }

    pub fn click_button(&mut self) {
        let id = self.button().id.clone();
        self.click(&id);
    }

    pub fn click_text(&mut self, text: &str) {
        let id = find_by_text(&self.root, text)
            .unwrap_or_else(|| panic!("no element with text {text:?}"))
            .id
            .clone();
        self.click(&id);
    }

    /// Click at screen coordinates, hit-testing like a host.
    pub fn click_at(&mut self, x: u16, y: u16) {
        let target = hit_test(&self.layout, &self.root, x, y);
        self.send(Event::Click {
            target,
            x,
            y,
            button: MouseButton::Left,
        });
    }

    pub fn press(&mut self, id: &str, key: Key) {
        self.send(Event::key(id, key));
    }

    pub fn send(&mut self, event: Event) {
        self.router.dispatch_event(&self.root, &self.layout, &event);
        self.dropdown.handle_event(&event);
        self.rerender();
    }

    pub fn rect(&self, id: &str) -> Rect {
        *self.layout.get(id).unwrap_or_else(|| panic!("no rect for {id}"))
    }
}

/// The dropdown from the component's documentation.
pub fn test_dropdown() -> Dropdown {
    Dropdown::new("Dropdown button")
        .id("menu")
        .placement(flyout::Placement::Right)
        .header(
            flyout::DropdownHeader::new()
                .line("Bonnie Green")
                .line("name@flowbite.com"),
        )
        .item(flyout::DropdownItem::new("Dashboard"))
        .item(flyout::DropdownItem::new("Settings"))
        .item(flyout::DropdownItem::new("Earnings"))
        .divider()
        .item(flyout::DropdownItem::new("Sign out"))
}
