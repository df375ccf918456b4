//! Event handling for the dropdown.
//!
//! Clicks and activation keys on the trigger toggle the panel. On an item
//! they select it, which closes the panel unless `dismiss_on_click` is off.
//! Outside clicks arrive through the outside-click subscription instead, see
//! [`Dropdown::mount`].

use flyout_dom::element::is_within;
use flyout_dom::{Event, MouseButton};

use super::item::ItemSelection;
use super::state::{Transition, Visibility};
use super::Dropdown;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl Dropdown {
    /// Handle a host event already targeted at an element.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.activate_target(target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if key.is_activation() && modifiers.none() => self.activate_target(target),
            _ => {
                log::trace!("[dropdown] {} ignores {:?}", self.id, event);
                EventResult::Ignored
            }
        }
    }

    /// Activate the trigger. Returns the new visibility.
    pub fn toggle(&self) -> Visibility {
        self.visibility.toggle()
    }

    /// Select the `index`th item.
    ///
    /// Runs the item's handler, then closes the panel if `dismiss_on_click`
    /// is set. Ignored while closed, for disabled items, and for indices past
    /// the last item.
    pub fn select_item(&self, index: usize) -> EventResult {
        let Some(item) = self.items().nth(index) else {
            log::trace!("[dropdown] {} has no item {index}", self.id);
            return EventResult::Ignored;
        };
        if !self.is_open() {
            log::debug!("[dropdown] {} ignores selection of {index} while closed", self.id);
            return EventResult::Ignored;
        }
        if item.disabled {
            return EventResult::Ignored;
        }

        if let Some(handler) = &item.on_select {
            handler(&ItemSelection {
                dropdown_id: self.id.clone(),
                index,
                label: item.label.clone(),
            });
        }
        self.visibility.apply(Transition::ItemSelected {
            dismiss_on_click: self.config.dismiss_on_click,
        });
        EventResult::Consumed
    }

    fn activate_target(&self, target: &str) -> EventResult {
        if self.is_activation_target(target) {
            self.toggle();
            EventResult::Consumed
        } else if let Some(index) = self.item_index(target) {
            self.select_item(index)
        } else {
            EventResult::Ignored
        }
    }

    /// Whether `target` is the trigger's activation root or lies inside it.
    fn is_activation_target(&self, target: &str) -> bool {
        let button_id = self.button_id();
        if target == button_id {
            return true;
        }
        let trigger = self.build_trigger(self.is_open());
        is_within(&trigger, &button_id, target)
    }

    /// Item index encoded in an element id produced by [`Dropdown::item_id`].
    fn item_index(&self, target: &str) -> Option<usize> {
        target
            .strip_prefix(self.id.as_str())?
            .strip_prefix("-item-")?
            .parse()
            .ok()
    }
}
