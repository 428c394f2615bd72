//! In-process publish/subscribe used by the stores to keep UI surfaces in sync.
//!
//! Delivery is synchronous and at-most-once: a listener sees an event only if
//! it was registered when `emit` ran. Nothing is queued or replayed, so
//! consumers read current store state on mount instead of relying on history.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
}

pub struct Broadcast<T> {
    registry: Rc<Registry<T>>,
}

impl<T: 'static> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers `listener` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let registry: Weak<Registry<T>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry
                        .listeners
                        .borrow_mut()
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    pub fn emit(&self, event: &T) {
        // Snapshot first: a listener may subscribe or unsubscribe while we call it.
        let listeners: Vec<Listener<T>> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl<T: 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_listener_receives_the_event_once() {
        let bus = Broadcast::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = seen.clone();
            bus.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = seen.clone();
            bus.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };

        bus.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
        drop((a, b));
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let bus = Broadcast::<()>::new();
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let hits = hits.clone();
            bus.subscribe(move |_| hits.set(hits.get() + 1))
        };
        bus.emit(&());
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        bus.emit(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn late_listeners_do_not_see_earlier_events() {
        let bus = Broadcast::<&'static str>::new();
        bus.emit(&"missed");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            bus.subscribe(move |v| seen.borrow_mut().push(*v))
        };
        bus.emit(&"delivered");

        assert_eq!(*seen.borrow(), vec!["delivered"]);
    }

    #[test]
    fn emit_with_no_listeners_is_a_no_op() {
        let bus = Broadcast::<()>::new();
        bus.emit(&());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_emit() {
        let bus = Broadcast::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let sub = {
            let slot = slot.clone();
            bus.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        bus.emit(&());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_the_bus_drops_cleanly() {
        let bus = Broadcast::<()>::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }
}
