//! Element tree and layout for a dropdown.

use flyout_dom::text::max_display_width;
use flyout_dom::{Element, LayoutResult, Rect, Role, INVISIBLE};

use super::Dropdown;
use super::item::{DropdownChild, DropdownItem};
use super::trigger::{TriggerContext, normalize};
use crate::layers::position::{PositionError, Positioner};

/// Columns between the panel edge and row text.
const PANEL_PADDING_X: u16 = 1;

/// `data-testid` of every dropdown panel.
pub const PANEL_TEST_ID: &str = "dropdown-panel";

impl Dropdown {
    /// Build the dropdown element.
    ///
    /// ```text
    /// {id}                       .dropdown
    /// ├── {id}-trigger           .dropdown-trigger
    /// │   └── {id}-button        role=button type=button
    /// └── {id}-panel             role=menu [.invisible]
    ///     ├── header / separator
    ///     └── {id}-item-{n}      role=menuitem
    /// ```
    pub fn build(&self) -> Element {
        let open = self.is_open();

        Element::box_()
            .id(self.id.as_str())
            .class("dropdown")
            .child(self.build_trigger(open))
            .child(self.build_panel(open))
    }

    /// The normalized trigger subtree, rooted at `{id}-trigger`.
    pub(crate) fn build_trigger(&self, open: bool) -> Element {
        let cx = self.trigger_context(open);
        normalize(
            self.trigger.render(&cx),
            &cx,
            &self.config.trigger_attrs,
            &self.button_id(),
            &self.trigger_id(),
        )
    }

    fn trigger_context(&self, open: bool) -> TriggerContext<'_> {
        TriggerContext {
            dropdown_id: &self.id,
            label: &self.config.label,
            open,
            inline: self.config.inline,
            placement: self.config.placement,
            arrow_icon: self.config.arrow_icon,
        }
    }

    fn build_panel(&self, open: bool) -> Element {
        let mut panel = Element::box_()
            .id(self.panel_id())
            .role(Role::Menu)
            .class("dropdown-panel")
            .attr("data-testid", PANEL_TEST_ID)
            .attr("data-placement", self.config.placement.as_str())
            .attr("aria-labelledby", self.button_id());
        // Hidden, not removed: the panel keeps its place in the tree
        if !open {
            panel = panel.class(INVISIBLE);
        }

        let mut index = 0;
        for child in &self.children {
            let element = match child {
                DropdownChild::Header(header) => Element::box_()
                    .class("dropdown-header")
                    .children(header.lines.iter().map(|line| Element::text(line.as_str()))),
                DropdownChild::Item(item) => {
                    let row = self.build_item(index, item);
                    index += 1;
                    row
                }
                DropdownChild::Divider => Element::box_()
                    .role(Role::Separator)
                    .class("dropdown-divider"),
            };
            panel = panel.child(element);
        }
        panel
    }

    fn build_item(&self, index: usize, item: &DropdownItem) -> Element {
        let mut row = Element::box_()
            .id(self.item_id(index))
            .role(Role::MenuItem)
            .class("dropdown-item")
            .clickable(!item.disabled)
            .focusable(!item.disabled)
            .disabled(item.disabled);
        if let Some(icon) = &item.icon {
            row = row.child(Element::text(icon.as_str()).class("icon"));
        }
        row.child(Element::text(item.label.as_str()))
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Size the panel needs: widest row plus padding, one line per row.
    pub fn panel_size(&self) -> (u16, u16) {
        let texts: Vec<String> = self
            .children
            .iter()
            .flat_map(|child| match child {
                DropdownChild::Header(header) => header.lines.clone(),
                DropdownChild::Item(item) => vec![item.display_text()],
                DropdownChild::Divider => Vec::new(),
            })
            .collect();
        let widest = max_display_width(texts.iter().map(String::as_str));

        let width = u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_add(PANEL_PADDING_X * 2);
        let height = self
            .children
            .iter()
            .map(DropdownChild::rows)
            .fold(0u16, u16::saturating_add);
        (width, height)
    }

    /// Ask `positioner` where the panel goes for a trigger at `anchor`.
    ///
    /// On failure the previous panel rect is kept. Visibility is unaffected
    /// either way.
    pub fn reposition(
        &mut self,
        anchor: Rect,
        positioner: &dyn Positioner,
    ) -> Result<Rect, PositionError> {
        match positioner.compute_position(anchor, self.panel_size(), self.config.placement) {
            Ok(rect) => {
                self.panel_rect = Some(rect);
                Ok(rect)
            }
            Err(err) => {
                log::warn!("[dropdown] {} keeps its previous panel position: {err}", self.id);
                Err(err)
            }
        }
    }

    /// Register the rects of the trigger, panel and items.
    ///
    /// The panel and its items are only registered once a position is known.
    pub fn layout(&self, anchor: Rect, layout: &mut LayoutResult) {
        layout.insert(self.trigger_id(), anchor);
        layout.insert(self.button_id(), anchor);

        let Some(panel) = self.panel_rect else {
            return;
        };
        layout.insert(self.panel_id(), panel);

        let mut row = 0u16;
        let mut index = 0;
        for child in &self.children {
            if let DropdownChild::Item(_) = child {
                layout.insert(self.item_id(index), panel.row(row, 1, PANEL_PADDING_X));
                index += 1;
            }
            row = row.saturating_add(child.rows());
        }
    }
}
