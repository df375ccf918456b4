use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Host events, already resolved to their target element.
///
/// The host hit-tests pointer events and targets key events at the focused
/// element before handing them to widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click; `target` is the deepest clickable element under the pointer
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

impl Event {
    /// Left click on `target` at the origin. Handy for scripted input.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on `target`.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Event::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
            Event::Focus { target } | Event::Blur { target } => Some(target),
        }
    }
}

/// Resolve a raw crossterm event against the current tree.
///
/// Key presses are targeted at `focused`; mouse-downs are hit-tested. Other
/// events (releases, moves, resizes, repeats) yield `None`.
pub fn resolve(
    event: &crossterm::event::Event,
    focused: Option<&str>,
    layout: &LayoutResult,
    root: &Element,
) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    match event {
        CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key {
            target: focused.map(str::to_string),
            key: key.code.into(),
            modifiers: key.modifiers.into(),
        }),
        CtEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(button) => Some(Event::Click {
                target: hit_test(layout, root, mouse.column, mouse.row),
                x: mouse.column,
                y: mouse.row,
                button: button.into(),
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Anything the widgets don't distinguish
    Other,
}

impl Key {
    /// Keys that activate a button: `Enter` and `Space`.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
