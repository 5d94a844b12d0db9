// Chunk: docs/chunks/session_events - Scoped change notification

//! Event sources with handle-based subscriptions.
//!
//! The controller publishes [`SessionEvent`]s through an [`EventSource`], and
//! the find/replace view-models publish their signals the same way. A
//! subscriber keeps the returned [`Subscription`] for as long as it wants
//! events; dropping it unregisters the handler. When the source itself is
//! dropped every outstanding handle becomes inert.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`): events are emitted
//! synchronously from the UI loop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::commands::{Predicate, StateField};

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<T>)>>,
}

/// A list of subscribers for events of type `T`.
pub struct EventSource<T> {
    registry: Rc<Registry<T>>,
}

impl<T: 'static> EventSource<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers `handler`. It stays registered until the returned handle is dropped.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);

        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        self.registry.handlers.borrow_mut().push((id, handler));

        let registry: Weak<Registry<T>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.handlers.borrow_mut().retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Delivers `event` to every registered handler, in subscription order.
    ///
    /// The handler list is snapshotted first, so handlers may subscribe or
    /// drop subscriptions while being called. A handler that is already
    /// running (re-entrant emit) is skipped.
    pub fn emit(&self, event: &T) {
        let handlers: Vec<Handler<T>> = self
            .registry
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.handlers.borrow().len()
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("subscribers", &self.registry.handlers.borrow().len())
            .finish()
    }
}

/// Handle for a registered handler. Dropping it unregisters the handler.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Notifications published by the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A piece of session state changed.
    ///
    /// `affected` lists every command and edit action whose availability
    /// reads `field`; hosts re-query exactly those.
    Changed {
        field: StateField,
        affected: Vec<Predicate>,
    },
    /// The caret should move to this char offset.
    GoToRequested(usize),
    /// The host should close the application.
    ExitRequested,
}
