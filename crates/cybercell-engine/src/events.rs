use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;

/// Element kinds a pointer can rest on. Only buttons and anchors count as
/// interactive by tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    Button,
    Anchor,
    Div,
    Span,
    Image,
}

/// The element under the pointer when a `pointer over` event fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverTarget {
    pub tag: ElementTag,
    pub classes: Vec<&'static str>,
}

impl HoverTarget {
    pub fn new(tag: ElementTag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Plain page background.
    pub fn background() -> Self {
        Self::new(ElementTag::Div)
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.tag, ElementTag::Button | ElementTag::Anchor)
            || self.classes.contains(&"hoverable")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Over { target: HoverTarget },
}

impl PointerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PointerEvent::Move { .. } => EventKind::PointerMove,
            PointerEvent::Over { .. } => EventKind::PointerOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerOver,
}

type Listener = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, EventKind, Listener)>,
}

/// Process-wide pointer event source, the terminal's stand-in for `window`.
///
/// Listeners are owned by the bus and removed when the returned
/// [`Subscription`] is dropped. Clones share the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        kind: EventKind,
        listener: impl FnMut(&PointerEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, kind, listener));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to every listener of its kind. Returns how many
    /// listeners ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let kind = event.kind();
        // Listeners may subscribe or unsubscribe while running, so the
        // registry borrow must end before any of them is called.
        let targets: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();

        for listener in &targets {
            let mut callback = listener.borrow_mut();
            (&mut *callback)(event);
        }
        targets.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }
}

/// Guard for one registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_matching_kind_only() {
        let bus = EventBus::new();
        let moves = Rc::new(Cell::new(0));
        let overs = Rc::new(Cell::new(0));

        let m = Rc::clone(&moves);
        let _move_sub = bus.subscribe(EventKind::PointerMove, move |_| m.set(m.get() + 1));
        let o = Rc::clone(&overs);
        let _over_sub = bus.subscribe(EventKind::PointerOver, move |_| o.set(o.get() + 1));

        assert_eq!(bus.dispatch(&PointerEvent::Move { x: 1.0, y: 2.0 }), 1);
        assert_eq!(moves.get(), 1);
        assert_eq!(overs.get(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = bus.subscribe(EventKind::PointerMove, move |_| h.set(h.get() + 1));
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.dispatch(&PointerEvent::Move { x: 0.0, y: 0.0 }), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_subscription_outliving_bus() {
        let bus = EventBus::new();
        let sub = bus.subscribe(EventKind::PointerOver, |_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn test_hover_target_interactivity() {
        assert!(HoverTarget::new(ElementTag::Button).is_interactive());
        assert!(HoverTarget::new(ElementTag::Anchor).is_interactive());
        assert!(
            HoverTarget::new(ElementTag::Div)
                .with_class("glass-card")
                .with_class("hoverable")
                .is_interactive()
        );
        assert!(!HoverTarget::background().is_interactive());
        assert!(!HoverTarget::new(ElementTag::Image).with_class("glass-card").is_interactive());
    }
}
