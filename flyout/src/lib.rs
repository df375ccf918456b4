//! Dropdown disclosure widget.
//!
//! A [`Dropdown`] renders a trigger and an always-present floating panel into
//! a `flyout_dom` element tree. The panel carries the `invisible` class while
//! closed. Visibility changes on trigger activation, item selection (subject
//! to `dismiss_on_click`) and clicks outside the widget, the latter reported
//! by an [`OutsideClickSource`].

pub mod dropdown;
pub mod layers;
pub mod logging;
pub mod placement;
pub mod prelude;

pub use dropdown::render::PANEL_TEST_ID;
pub use dropdown::{
    DefaultTrigger, Dropdown, DropdownChild, DropdownConfig, DropdownHeader, DropdownId,
    DropdownItem, EventResult, ItemSelection, SelectHandler, Transition, TriggerContext,
    TriggerRenderer, Visibility, VisibilityController, WeakVisibility,
};
pub use flyout_dom;
pub use layers::outside::{OutsideClickRouter, OutsideClickSource, OutsideHandler, Subscription};
pub use layers::position::{AnchoredPositioner, PositionError, Positioner};
pub use placement::{Alignment, Placement, PlacementParseError, Side};
