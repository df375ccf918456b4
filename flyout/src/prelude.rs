//! Common imports for hosting dropdowns.

pub use crate::{
    AnchoredPositioner, Dropdown, DropdownHeader, DropdownItem, EventResult, ItemSelection,
    OutsideClickRouter, OutsideClickSource, Placement, Positioner, TriggerContext, Visibility,
};
pub use flyout_dom::{Element, Event, Key, LayoutResult, Rect};
