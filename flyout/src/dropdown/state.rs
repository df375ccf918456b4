//! Dropdown visibility state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Unique identifier for a Dropdown widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dropdown-{}", self.0)
    }
}

/// Whether the panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Input to the visibility state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The trigger was clicked or activated from the keyboard.
    TriggerActivated,
    /// An item was chosen; closes only when `dismiss_on_click` is set.
    ItemSelected { dismiss_on_click: bool },
    /// A click landed outside the trigger and the panel.
    OutsideInteraction,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// State after `transition`.
    ///
    /// Trigger activation always flips. Everything else can only close, and
    /// only an open panel.
    pub fn next(self, transition: Transition) -> Visibility {
        match (self, transition) {
            (Visibility::Closed, Transition::TriggerActivated) => Visibility::Open,
            (Visibility::Open, Transition::TriggerActivated) => Visibility::Closed,
            (Visibility::Open, Transition::ItemSelected { dismiss_on_click: true }) => {
                Visibility::Closed
            }
            (Visibility::Open, Transition::OutsideInteraction) => Visibility::Closed,
            (state, _) => state,
        }
    }
}

impl From<bool> for Visibility {
    fn from(open: bool) -> Self {
        if open { Visibility::Open } else { Visibility::Closed }
    }
}

/// Owns the open flag of one dropdown.
///
/// Clones share the same flag. Callbacks held by collaborators should use
/// [`VisibilityController::downgrade`] so they can't keep a dropped widget's
/// state alive.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    owner: Arc<str>,
    open: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl VisibilityController {
    /// Closed controller for the dropdown `owner`.
    pub fn new(owner: impl Into<Arc<str>>) -> Self {
        Self {
            owner: owner.into(),
            open: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn visibility(&self) -> Visibility {
        self.open.load(Ordering::SeqCst).into()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Run `transition`. Returns true if visibility changed.
    pub fn apply(&self, transition: Transition) -> bool {
        let current = self.visibility();
        let next = current.next(transition);
        if next == current {
            log::trace!("[dropdown] {} stays {:?} on {:?}", self.owner, current, transition);
            return false;
        }
        self.open.store(next.is_open(), Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[dropdown] {} -> {next:?} ({transition:?})", self.owner);
        true
    }

    /// Flip visibility. Returns the new state.
    pub fn toggle(&self) -> Visibility {
        self.apply(Transition::TriggerActivated);
        self.visibility()
    }

    /// Close if open. Returns true if it was open.
    pub fn request_close(&self) -> bool {
        self.apply(Transition::OutsideInteraction)
    }

    /// Check if visibility changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub fn downgrade(&self) -> WeakVisibility {
        WeakVisibility {
            owner: Arc::clone(&self.owner),
            open: Arc::downgrade(&self.open),
            dirty: Arc::downgrade(&self.dirty),
        }
    }
}

/// Non-owning handle to a [`VisibilityController`].
///
/// Once every controller clone is dropped, calls are ignored.
#[derive(Debug, Clone)]
pub struct WeakVisibility {
    owner: Arc<str>,
    open: Weak<AtomicBool>,
    dirty: Weak<AtomicBool>,
}

impl WeakVisibility {
    /// Close if the widget still exists and is open. Returns true if it closed.
    pub fn request_close(&self) -> bool {
        match self.upgrade() {
            Some(controller) => controller.request_close(),
            None => {
                log::trace!("[dropdown] {} is gone, ignoring close", self.owner);
                false
            }
        }
    }

    /// The controller, if the widget still exists.
    pub fn upgrade(&self) -> Option<VisibilityController> {
        Some(VisibilityController {
            owner: Arc::clone(&self.owner),
            open: self.open.upgrade()?,
            dirty: self.dirty.upgrade()?,
        })
    }

    /// Whether the widget has been dropped.
    pub fn is_stale(&self) -> bool {
        self.open.strong_count() == 0
    }
}
