use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::definition::ShapeRef;

/// Handle returned by [`SelectedShape::subscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&ShapeRef)>;

/// Observable cell holding the shape the user currently places.
///
/// Single-threaded: reads and writes go through `&self`, the last write
/// wins, and subscribers run synchronously after each [`set`](Self::set).
/// No check is made that the new value belongs to a registry.
pub struct SelectedShape {
    current: RefCell<ShapeRef>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl SelectedShape {
    pub fn new(initial: ShapeRef) -> Self {
        Self {
            current: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Current value (a new handle to the same definition).
    #[inline]
    pub fn get(&self) -> ShapeRef {
        self.current.borrow().clone()
    }

    /// Identity comparison against the current value.
    #[inline]
    pub fn is(&self, shape: &ShapeRef) -> bool {
        Rc::ptr_eq(&*self.current.borrow(), shape)
    }

    /// Replaces the value, notifies subscribers, returns the previous value.
    ///
    /// Subscribers are notified even when `shape` is the current value.
    pub fn set(&self, shape: ShapeRef) -> ShapeRef {
        let previous = self.current.replace(shape.clone());
        log::trace!("selected shape: {} -> {}", previous.name(), shape.name());

        // Snapshot so listeners may subscribe, unsubscribe or set re-entrantly.
        let listeners: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&shape);
        }
        previous
    }

    pub fn subscribe(&self, listener: impl Fn(&ShapeRef) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for SelectedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedShape")
            .field("current", &self.current.borrow().name())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
