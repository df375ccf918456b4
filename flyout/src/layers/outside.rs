//! Outside-click detection.
//!
//! A widget with floating content subscribes with the ids of the subtrees it
//! owns (trigger and panel). The host forwards every click to the source;
//! listeners whose excluded subtrees don't contain the click target are told
//! the click happened outside.
//!
//! # Example
//!
//! ```ignore
//! let router = OutsideClickRouter::new();
//! dropdown.mount(&router);
//!
//! // In the host's event loop, for every resolved click:
//! router.dispatch_event(&root, &layout, &event);
//! dropdown.handle_event(&event);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use flyout_dom::element::is_within;
use flyout_dom::{Element, Event, LayoutResult, hit_test_any};

/// Callback fired when a click lands outside the excluded subtrees.
pub type OutsideHandler = Arc<dyn Fn() + Send + Sync>;

/// Anything that can report outside clicks.
pub trait OutsideClickSource {
    /// Register `on_outside` for clicks outside every subtree in `excluded`.
    ///
    /// The callback fires at most once per qualifying click. Dropping the
    /// returned [`Subscription`] deregisters it.
    fn subscribe(&self, excluded: Vec<String>, on_outside: OutsideHandler) -> Subscription;
}

/// Handle to a registered outside-click listener.
///
/// Deregisters on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Subscription that runs `cancel` when released.
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Release the subscription now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

struct Listener {
    id: u64,
    excluded: Vec<String>,
    handler: OutsideHandler,
}

/// Default [`OutsideClickSource`]: the host feeds it resolved click targets.
#[derive(Clone, Default)]
pub struct OutsideClickRouter {
    listeners: Arc<Mutex<Vec<Listener>>>,
    next_id: Arc<AtomicU64>,
}

impl OutsideClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    /// Report a click on `target` (`None` for empty space) within `root`.
    ///
    /// Returns how many listeners were notified.
    pub fn dispatch(&self, root: &Element, target: Option<&str>) -> usize {
        // Collect first so handlers run without the lock held
        let handlers: Vec<OutsideHandler> = lock(&self.listeners)
            .iter()
            .filter(|listener| is_outside(root, &listener.excluded, target))
            .map(|listener| Arc::clone(&listener.handler))
            .collect();

        log::trace!(
            "[outside] click on {:?} notifies {} listener(s)",
            target,
            handlers.len()
        );

        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Report a host event. Only clicks are considered.
    ///
    /// Clicks without a clickable target are resolved against `layout`, so a
    /// click on a panel's header still counts as inside the panel.
    pub fn dispatch_event(&self, root: &Element, layout: &LayoutResult, event: &Event) -> usize {
        match event {
            Event::Click { target, x, y, .. } => {
                let target = target
                    .clone()
                    .or_else(|| hit_test_any(layout, root, *x, *y));
                self.dispatch(root, target.as_deref())
            }
            _ => 0,
        }
    }
}

impl OutsideClickSource for OutsideClickRouter {
    fn subscribe(&self, excluded: Vec<String>, on_outside: OutsideHandler) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!("[outside] subscribe #{id} excluding {excluded:?}");
        lock(&self.listeners).push(Listener {
            id,
            excluded,
            handler: on_outside,
        });

        let listeners: Weak<Mutex<Vec<Listener>>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                lock(&listeners).retain(|listener| listener.id != id);
                log::debug!("[outside] unsubscribe #{id}");
            }
        })
    }
}

impl fmt::Debug for OutsideClickRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClickRouter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

fn is_outside(root: &Element, excluded: &[String], target: Option<&str>) -> bool {
    match target {
        Some(target) => !excluded.iter().any(|ex| is_within(root, ex, target)),
        None => true,
    }
}

fn lock(listeners: &Mutex<Vec<Listener>>) -> MutexGuard<'_, Vec<Listener>> {
    listeners
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
