//! Panel children: items, headers and dividers.

use std::fmt;
use std::sync::Arc;

/// Caller hook run when an item is chosen.
pub type SelectHandler = Arc<dyn Fn(&ItemSelection) + Send + Sync>;

/// Passed to an item's selection handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelection {
    /// Id of the dropdown the item belongs to.
    pub dropdown_id: String,
    /// Position among the dropdown's items (headers and dividers don't count).
    pub index: usize,
    pub label: String,
}

/// A selectable row.
///
/// # Example
///
/// ```ignore
/// DropdownItem::new("Sign out")
///     .icon("⏻")
///     .on_select(|selection| log::info!("chose {}", selection.label))
/// ```
#[derive(Clone, Default)]
pub struct DropdownItem {
    pub(crate) label: String,
    pub(crate) icon: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) on_select: Option<SelectHandler>,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Glyph shown before the label.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Disabled items can't be selected and never close the panel.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&ItemSelection) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Label with the icon prefix, as displayed.
    pub(crate) fn display_text(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.clone(),
        }
    }
}

impl fmt::Debug for DropdownItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownItem")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("disabled", &self.disabled)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Non-interactive lines at the top of a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownHeader {
    pub(crate) lines: Vec<String>,
}

impl DropdownHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

#[derive(Debug, Clone)]
pub enum DropdownChild {
    Header(DropdownHeader),
    Item(DropdownItem),
    Divider,
}

impl DropdownChild {
    /// Rows this child occupies in the panel.
    pub(crate) fn rows(&self) -> u16 {
        match self {
            DropdownChild::Header(header) => u16::try_from(header.lines.len()).unwrap_or(u16::MAX),
            DropdownChild::Item(_) | DropdownChild::Divider => 1,
        }
    }
}

impl From<DropdownItem> for DropdownChild {
    fn from(item: DropdownItem) -> Self {
        DropdownChild::Item(item)
    }
}

impl From<DropdownHeader> for DropdownChild {
    fn from(header: DropdownHeader) -> Self {
        DropdownChild::Header(header)
    }
}
