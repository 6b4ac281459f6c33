//! Event source contract and in-process implementations.
//!
//! A manager never talks to a UI toolkit directly. It only needs something
//! that can register and unregister a listener for a named key event, and,
//! for selector strings, something that can resolve a selector to such a
//! source.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::keys::KeyboardEvent;

/// Callback an event source invokes for every matching key event.
pub type KeyListener = Arc<dyn Fn(&mut dyn KeyboardEvent) + Send + Sync>;

/// Handle returned by `KeyEventSource::add_listener`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Anything that can deliver named key events to listeners.
pub trait KeyEventSource: Send + Sync {
    fn add_listener(&self, event_name: &str, listener: KeyListener) -> ListenerId;

    /// Removing an unknown id is a no-op.
    fn remove_listener(&self, event_name: &str, id: ListenerId);
}

/// Resolves selector strings to event sources, like `document.querySelector`.
pub trait ContainerResolver: Send + Sync {
    fn query_selector(&self, selector: &str) -> Option<Arc<dyn KeyEventSource>>;
}

/// Where a manager should listen for key events.
#[derive(Clone)]
pub enum Container {
    /// Resolved through the manager's `ContainerResolver`
    Selector(String),
    Source(Arc<dyn KeyEventSource>),
}

impl Container {
    pub fn source<S: KeyEventSource + 'static>(source: Arc<S>) -> Self {
        Self::Source(source)
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Container {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Source(_) => f.write_str("Source(..)"),
        }
    }
}

// =============================================================================
// KeyEventBus
// =============================================================================

struct Registration {
    id: ListenerId,
    event_name: String,
    listener: KeyListener,
}

/// Minimal in-process event source. Hosts forward their native key events
/// with `emit`.
#[derive(Default)]
pub struct KeyEventBus {
    listeners: Mutex<Vec<Registration>>,
    next_id: AtomicU64,
}

impl KeyEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener registered for `event_name`.
    ///
    /// Returns how many listeners were called. Listeners run without the bus
    /// lock held, so they may add or remove listeners.
    pub fn emit(&self, event_name: &str, event: &mut dyn KeyboardEvent) -> usize {
        let listeners: Vec<KeyListener> = self
            .listeners
            .lock()
            .iter()
            .filter(|r| r.event_name == event_name)
            .map(|r| r.listener.clone())
            .collect();

        for listener in &listeners {
            listener(&mut *event);
        }
        listeners.len()
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .lock()
            .iter()
            .filter(|r| r.event_name == event_name)
            .count()
    }
}

impl KeyEventSource for KeyEventBus {
    fn add_listener(&self, event_name: &str, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push(Registration {
            id,
            event_name: event_name.to_string(),
            listener,
        });
        id
    }

    fn remove_listener(&self, event_name: &str, id: ListenerId) {
        self.listeners
            .lock()
            .retain(|r| !(r.id == id && r.event_name == event_name));
    }
}

// =============================================================================
// SourceRegistry
// =============================================================================

/// Selector -> event source map, usable as a `ContainerResolver`.
#[derive(Default)]
pub struct SourceRegistry {
    sources: RwLock<HashMap<String, Arc<dyn KeyEventSource>>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, selector: impl Into<String>, source: Arc<dyn KeyEventSource>) {
        self.sources.write().insert(selector.into(), source);
    }

    pub fn unregister(&self, selector: &str) {
        self.sources.write().remove(selector);
    }
}

impl ContainerResolver for SourceRegistry {
    fn query_selector(&self, selector: &str) -> Option<Arc<dyn KeyEventSource>> {
        self.sources.read().get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyEvent;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn emit_reaches_matching_listeners_only() {
        let bus = KeyEventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bus.add_listener(
            "keydown",
            Arc::new(move |_event: &mut dyn KeyboardEvent| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let mut event = KeyEvent::new("a");
        assert_eq!(bus.emit("keydown", &mut event), 1);
        assert_eq!(bus.emit("keyup", &mut event), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remove_listener_stops_delivery() {
        let bus = KeyEventBus::new();
        let id = bus.add_listener("keydown", Arc::new(|_event: &mut dyn KeyboardEvent| {}));
        assert_eq!(bus.listener_count("keydown"), 1);

        bus.remove_listener("keyup", id);
        assert_eq!(bus.listener_count("keydown"), 1);

        bus.remove_listener("keydown", id);
        bus.remove_listener("keydown", id);
        assert_eq!(bus.listener_count("keydown"), 0);
    }

    #[test]
    fn source_registry_resolves_selectors() {
        let registry = SourceRegistry::new();
        registry.register("#app", Arc::new(KeyEventBus::new()));

        assert!(registry.query_selector("#app").is_some());
        assert!(registry.query_selector("#missing").is_none());

        registry.unregister("#app");
        assert!(registry.query_selector("#app").is_none());
    }

    #[test]
    fn selector_strings_convert_to_containers() {
        let container: Container = "#app".into();
        assert!(matches!(container, Container::Selector(ref s) if s == "#app"));
    }
}
