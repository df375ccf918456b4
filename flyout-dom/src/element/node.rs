use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Role};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub role: Role,

    // Content
    pub content: Content,

    // Markup
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::None,
            content: Content::None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            clickable: false,
            focusable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// A clickable, focusable element with the `button` role.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            role: Role::Button,
            content: Content::Text(label.into()),
            clickable: true,
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove `class` in place.
    pub fn set_class(&mut self, class: &str, present: bool) {
        if present {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            // Text content becomes the first child
            Content::Text(text) => {
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
            Content::None => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(self, new_children: impl IntoIterator<Item = Element>) -> Self {
        new_children.into_iter().fold(self, Element::child)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
