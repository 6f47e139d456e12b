// Viewport event hub - resize and section visibility listeners
//
// Listeners get their events over a channel. A `Subscription` is the
// registration itself: dropping it removes the listener from the hub.

use crate::model::Section;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{channel, Receiver, Sender, TryIter};

#[derive(Clone, Debug, PartialEq)]
pub enum ViewportEvent {
    Resized {
        width: f32,
    },
    Intersection {
        section: Section,
        is_intersecting: bool,
        ratio: f32,
    },
}

impl ViewportEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Resized { .. } => EventKind::Resize,
            Self::Intersection { .. } => EventKind::Visibility,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Resize,
    Visibility,
}

struct Listener {
    id: u64,
    kind: EventKind,
    tx: Sender<ViewportEvent>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Dispatches viewport events to registered listeners.
#[derive(Clone)]
pub struct ViewportEvents {
    registry: Rc<RefCell<Registry>>,
    visibility_supported: bool,
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            visibility_supported: true,
        }
    }

    /// A hub that cannot observe section visibility. Resize still works.
    pub fn without_visibility() -> Self {
        Self {
            visibility_supported: false,
            ..Self::new()
        }
    }

    pub fn supports(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Resize => true,
            EventKind::Visibility => self.visibility_supported,
        }
    }

    /// Register a listener. Returns `None` when the hub cannot observe `kind`.
    pub fn subscribe(&self, kind: EventKind) -> Option<Subscription> {
        if !self.supports(kind) {
            return None;
        }

        let (tx, rx) = channel();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener { id, kind, tx });

        Some(Subscription {
            id,
            rx,
            registry: Rc::downgrade(&self.registry),
        })
    }

    /// Deliver an event to every listener of its kind.
    pub fn emit(&self, event: ViewportEvent) {
        let kind = event.kind();
        let mut registry = self.registry.borrow_mut();
        // A listener whose receiver is gone is pruned on the spot
        registry
            .listeners
            .retain(|l| l.kind != kind || l.tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl Default for ViewportEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// A live listener registration.
pub struct Subscription {
    id: u64,
    rx: Receiver<ViewportEvent>,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Events received since the last drain, oldest first.
    pub fn drain(&self) -> TryIter<'_, ViewportEvent> {
        self.rx.try_iter()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_routed_by_kind() {
        let hub = ViewportEvents::new();
        let resize = hub.subscribe(EventKind::Resize).unwrap();
        let visibility = hub.subscribe(EventKind::Visibility).unwrap();

        hub.emit(ViewportEvent::Resized { width: 800.0 });

        assert_eq!(
            resize.drain().collect::<Vec<_>>(),
            vec![ViewportEvent::Resized { width: 800.0 }]
        );
        assert_eq!(visibility.drain().count(), 0);
    }

    #[test]
    fn test_drop_deregisters() {
        let hub = ViewportEvents::new();
        let sub = hub.subscribe(EventKind::Resize).unwrap();
        assert_eq!(hub.listener_count(), 1);
        drop(sub);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_deregistered_on_early_return() {
        fn register_then_bail(hub: &ViewportEvents) -> Option<()> {
            let _resize = hub.subscribe(EventKind::Resize)?;
            let _visibility = hub.subscribe(EventKind::Visibility)?;
            let layout_ready: Option<()> = None;
            layout_ready?;
            Some(())
        }

        let hub = ViewportEvents::new();
        assert!(register_then_bail(&hub).is_none());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = ViewportEvents::new();
        let sub = hub.subscribe(EventKind::Resize).unwrap();
        drop(hub);
        assert_eq!(sub.drain().count(), 0);
        drop(sub);
    }

    #[test]
    fn test_visibility_unavailable() {
        let hub = ViewportEvents::without_visibility();
        assert!(hub.subscribe(EventKind::Visibility).is_none());
        assert!(hub.subscribe(EventKind::Resize).is_some());
    }
}
