//! Trigger rendering.
//!
//! The dropdown only needs "an element that can be clicked". Either the
//! [`DefaultTrigger`] button or any caller renderer provides it; after
//! rendering, [`normalize`] takes over the activation root's id and forces
//! `type="button"` on every button in the trigger so it can't submit an
//! enclosing form.

use flyout_dom::{Element, Role};

use crate::placement::{Placement, Side};

/// What a trigger renderer gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct TriggerContext<'a> {
    pub dropdown_id: &'a str,
    pub label: &'a str,
    pub open: bool,
    pub inline: bool,
    pub placement: Placement,
    pub arrow_icon: bool,
}

impl TriggerContext<'_> {
    /// Chevron pointing at the panel's side.
    pub fn arrow(&self) -> &'static str {
        match self.placement.side() {
            Side::Top => "▲",
            Side::Right => "▶",
            Side::Bottom => "▼",
            Side::Left => "◀",
        }
    }
}

/// Renders the element that opens and closes the panel.
///
/// Closures `Fn(&TriggerContext) -> Element` implement this, so a custom
/// trigger is usually just:
///
/// ```ignore
/// Dropdown::new("Account")
///     .render_trigger(|cx: &TriggerContext<'_>| Element::button(cx.label).class("avatar"))
/// ```
///
/// The renderer must include a clickable element; without one the trigger
/// renders but never activates.
pub trait TriggerRenderer: Send + Sync {
    fn render(&self, cx: &TriggerContext<'_>) -> Element;
}

impl<F> TriggerRenderer for F
where
    F: Fn(&TriggerContext<'_>) -> Element + Send + Sync,
{
    fn render(&self, cx: &TriggerContext<'_>) -> Element {
        self(cx)
    }
}

/// Labelled button with an optional chevron.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTrigger;

impl TriggerRenderer for DefaultTrigger {
    fn render(&self, cx: &TriggerContext<'_>) -> Element {
        // Inline triggers read as text, not as a filled button
        let class = if cx.inline { "inline" } else { "button" };
        let button = Element::button(cx.label).class(class);
        if cx.arrow_icon {
            button.child(Element::text(cx.arrow()).class("arrow"))
        } else {
            button
        }
    }
}

/// Wrap a rendered trigger and enforce the attributes the dropdown relies on.
///
/// `attrs` are caller attributes for the activation root; they are applied
/// before enforcement so they can't override `type` or the id. Elements
/// nested in the activation root lose `clickable` and `focusable`.
pub(crate) fn normalize(
    rendered: Element,
    cx: &TriggerContext<'_>,
    attrs: &[(String, String)],
    button_id: &str,
    trigger_id: &str,
) -> Element {
    let mut rendered = rendered;

    match first_clickable_mut(&mut rendered) {
        Some(root) => {
            for (name, value) in attrs {
                root.set_attr(name.as_str(), value.as_str());
            }
            root.id = button_id.to_string();
            root.focusable = true;
            root.set_attr("aria-haspopup", "menu");
            root.set_attr("aria-expanded", cx.open.to_string());
            for child in root.child_elements_mut() {
                make_inert(child);
            }
        }
        None => {
            log::debug!(
                "[dropdown] {} trigger has no clickable element; it will never activate",
                cx.dropdown_id
            );
        }
    }

    force_button_type(&mut rendered);

    Element::box_()
        .id(trigger_id)
        .class("dropdown-trigger")
        .child(rendered)
}

/// First clickable element in document order.
fn first_clickable_mut(element: &mut Element) -> Option<&mut Element> {
    if element.clickable {
        return Some(element);
    }
    element
        .child_elements_mut()
        .iter_mut()
        .find_map(first_clickable_mut)
}

/// Strip interactivity below the activation root so hit testing and focus
/// always land on the root itself.
fn make_inert(element: &mut Element) {
    element.clickable = false;
    element.focusable = false;
    for child in element.child_elements_mut() {
        make_inert(child);
    }
}

fn force_button_type(element: &mut Element) {
    if element.role == Role::Button {
        element.set_attr("type", "button");
    }
    for child in element.child_elements_mut() {
        force_button_type(child);
    }
}
