//! Dropdown widget - a trigger that shows and hides a panel of items.
//!
//! # Example
//!
//! ```ignore
//! let mut dropdown = Dropdown::new("Dropdown button")
//!     .placement(Placement::Right)
//!     .header(DropdownHeader::new().line("Bonnie Green").line("name@flowbite.com"))
//!     .item(DropdownItem::new("Dashboard"))
//!     .item(DropdownItem::new("Settings"))
//!     .divider()
//!     .item(DropdownItem::new("Sign out"));
//!
//! dropdown.mount(&router);
//! let tree = dropdown.build();
//! ```

pub mod events;
pub mod item;
pub mod render;
mod state;
pub mod trigger;

use std::sync::Arc;

use flyout_dom::{Element, Rect};

use crate::layers::outside::{OutsideClickSource, OutsideHandler, Subscription};
use crate::placement::Placement;

pub use events::EventResult;
pub use item::{DropdownChild, DropdownHeader, DropdownItem, ItemSelection, SelectHandler};
pub use state::{DropdownId, Transition, Visibility, VisibilityController, WeakVisibility};
pub use trigger::{DefaultTrigger, TriggerContext, TriggerRenderer};

/// Per-dropdown configuration. Fixed once the dropdown is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    /// Trigger text.
    pub label: String,
    /// Where the panel goes; forwarded to the positioner.
    pub placement: Placement,
    /// Close the panel when an item is selected.
    pub dismiss_on_click: bool,
    /// Render the default trigger as inline text instead of a button.
    pub inline: bool,
    /// Show a chevron in the default trigger.
    pub arrow_icon: bool,
    /// Extra attributes for the trigger's activation root.
    pub trigger_attrs: Vec<(String, String)>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            placement: Placement::default(),
            dismiss_on_click: true,
            inline: false,
            arrow_icon: true,
            trigger_attrs: Vec::new(),
        }
    }
}

/// A dropdown: trigger, panel, and the state deciding whether the panel shows.
///
/// The panel is always part of the built tree; while closed it carries the
/// `invisible` class so hosts can lay it out and position it before it is
/// shown.
pub struct Dropdown {
    id: String,
    config: DropdownConfig,
    trigger: Arc<dyn TriggerRenderer>,
    children: Vec<DropdownChild>,
    visibility: VisibilityController,
    panel_rect: Option<Rect>,
    subscription: Option<Subscription>,
}

impl Dropdown {
    /// Create a closed dropdown with the default trigger.
    pub fn new(label: impl Into<String>) -> Self {
        let id = DropdownId::new().to_string();
        Self {
            visibility: VisibilityController::new(id.as_str()),
            id,
            config: DropdownConfig {
                label: label.into(),
                ..Default::default()
            },
            trigger: Arc::new(DefaultTrigger),
            children: Vec::new(),
            panel_rect: None,
            subscription: None,
        }
    }

    /// Create a closed dropdown from a full configuration.
    pub fn with_config(config: DropdownConfig) -> Self {
        let mut dropdown = Self::new(String::new());
        dropdown.config = config;
        dropdown
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the dropdown id. Trigger, panel and item ids derive from it.
    ///
    /// Call this before [`mount`](Self::mount). On a mounted dropdown the
    /// subscription for the old ids is released and the dropdown has to be
    /// mounted again; the current visibility is kept.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.subscription.take().is_some() {
            log::warn!("[dropdown] {} renamed to {id} while mounted; mount it again", self.id);
        }
        let open = self.is_open();
        self.id = id;
        self.visibility = VisibilityController::new(self.id.as_str());
        if open {
            self.visibility.toggle();
            self.visibility.clear_dirty();
        }
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn dismiss_on_click(mut self, dismiss: bool) -> Self {
        self.config.dismiss_on_click = dismiss;
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.config.inline = inline;
        self
    }

    pub fn arrow_icon(mut self, arrow_icon: bool) -> Self {
        self.config.arrow_icon = arrow_icon;
        self
    }

    /// Add an attribute to the trigger's activation root.
    ///
    /// `type` is always overridden to `"button"` on buttons.
    pub fn trigger_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.trigger_attrs.push((name.into(), value.into()));
        self
    }

    /// Replace the default trigger with a closure.
    pub fn render_trigger<F>(self, render: F) -> Self
    where
        F: Fn(&TriggerContext<'_>) -> Element + Send + Sync + 'static,
    {
        self.trigger(render)
    }

    /// Replace the default trigger with any renderer.
    pub fn trigger(mut self, renderer: impl TriggerRenderer + 'static) -> Self {
        self.trigger = Arc::new(renderer);
        self
    }

    pub fn header(self, header: DropdownHeader) -> Self {
        self.child(header)
    }

    pub fn item(self, item: DropdownItem) -> Self {
        self.child(item)
    }

    pub fn divider(self) -> Self {
        self.child(DropdownChild::Divider)
    }

    pub fn child(mut self, child: impl Into<DropdownChild>) -> Self {
        self.children.push(child.into());
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id_str(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.visibility()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// The state machine behind this dropdown.
    pub fn controller(&self) -> &VisibilityController {
        &self.visibility
    }

    /// Id of the container wrapping the whole trigger subtree.
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    /// Id of the trigger's activation root.
    pub fn button_id(&self) -> String {
        format!("{}-button", self.id)
    }

    pub fn panel_id(&self) -> String {
        format!("{}-panel", self.id)
    }

    /// Id of the `index`th item.
    pub fn item_id(&self, index: usize) -> String {
        format!("{}-item-{index}", self.id)
    }

    pub fn items(&self) -> impl Iterator<Item = &DropdownItem> {
        self.children.iter().filter_map(|child| match child {
            DropdownChild::Item(item) => Some(item),
            _ => None,
        })
    }

    /// Last rect the positioner produced for the panel.
    pub fn panel_rect(&self) -> Option<Rect> {
        self.panel_rect
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Start listening for outside clicks.
    ///
    /// Clicks anywhere in the trigger subtree or the panel are not outside.
    /// Mounting an already mounted dropdown replaces its subscription.
    pub fn mount(&mut self, source: &dyn OutsideClickSource) {
        let weak = self.visibility.downgrade();
        let on_outside: OutsideHandler = Arc::new(move || {
            weak.request_close();
        });
        let subscription = source.subscribe(vec![self.trigger_id(), self.panel_id()], on_outside);
        if self.subscription.replace(subscription).is_some() {
            log::debug!("[dropdown] {} remounted", self.id);
        } else {
            log::debug!("[dropdown] {} mounted", self.id);
        }
    }

    /// Stop listening for outside clicks. Dropping the dropdown does the same.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("[dropdown] {} unmounted", self.id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("children", &self.children)
            .field("visibility", &self.visibility())
            .field("panel_rect", &self.panel_rect)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
