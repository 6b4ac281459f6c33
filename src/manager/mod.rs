//! Command manager - scoped keyboard dispatch.
//!
//! This module provides:
//! - `CommandManager` - owns the command registry and the scope stack
//! - `CommandsScope` - handlers for the active UI context
//! - `ScopeGuard` - removes its scope when disposed or dropped
//! - Event source traits and in-process implementations
//!
//! # Dispatch
//!
//! Every key press is resolved against the top scope only. A scope pushed
//! later fully shadows the scopes below it, and a key the top scope does not
//! handle is ignored rather than passed down.
//!
//! ```
//! use global_commands::commands::{CommandGroup, CommandSpec};
//! use global_commands::manager::{CommandManager, CommandsScope};
//!
//! let sales = CommandGroup::new(
//!     "sales",
//!     [("open_drawer", CommandSpec::new("Open cash drawer").key("ctrl+g"))],
//! );
//! let manager = CommandManager::new(vec![sales]).unwrap();
//!
//! assert!(!manager.keybind_pressed("ctrl+g"));
//! let guard = manager.use_scope(CommandsScope::new().on("open_drawer", || {}));
//! assert!(manager.keybind_pressed("ctrl+g"));
//! guard.dispose();
//! assert!(!manager.keybind_pressed("ctrl+g"));
//! ```

mod scope;
mod source;


use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::commands::{ensure_unique_codes, CommandGroup, CommandRegistry};
use crate::config::ManagerConfig;
use crate::error::{CommandError, Result};
use crate::keys::{is_canonical, normalize, KeyboardEvent};

pub use scope::{CommandsScope, Handler, ScopeId};
pub use source::{
    Container, ContainerResolver, KeyEventBus, KeyEventSource, KeyListener, ListenerId,
    SourceRegistry,
};

use scope::ScopeStack;

/// Listener currently installed on a container.
struct Attachment {
    source: Arc<dyn KeyEventSource>,
    id: ListenerId,
}

#[derive(Default)]
struct ManagerState {
    scopes: ScopeStack,
    container: Option<Arc<dyn KeyEventSource>>,
    attached: Option<Attachment>,
    resolver: Option<Arc<dyn ContainerResolver>>,
}

struct Shared {
    groups: Vec<CommandGroup>,
    config: ManagerConfig,
    registry: OnceLock<CommandRegistry>,
    state: Mutex<ManagerState>,
}

/// Routes key presses to the handlers of the most recently pushed scope.
///
/// Cloning is cheap and every clone drives the same scopes. The internal
/// lock is never held while a handler or an event source runs, so handlers
/// may push or dispose scopes themselves.
#[derive(Clone)]
pub struct CommandManager {
    shared: Arc<Shared>,
}

impl CommandManager {
    /// Create a manager over `groups` with the default configuration.
    ///
    /// Fails with `DuplicateCode` if two groups define the same code.
    pub fn new(groups: Vec<CommandGroup>) -> Result<Self> {
        Self::with_config(groups, ManagerConfig::default())
    }

    pub fn with_config(groups: Vec<CommandGroup>, config: ManagerConfig) -> Result<Self> {
        ensure_unique_codes(&groups)?;

        Ok(Self {
            shared: Arc::new(Shared {
                groups,
                config,
                registry: OnceLock::new(),
                state: Mutex::new(ManagerState::default()),
            }),
        })
    }

    /// Install the resolver used for `Container::Selector`.
    pub fn with_resolver(self, resolver: Arc<dyn ContainerResolver>) -> Self {
        self.shared.state.lock().resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.shared.config
    }

    /// All registered commands, flattened across groups.
    ///
    /// Built on first access and returned as the same registry afterwards.
    pub fn commands(&self) -> &CommandRegistry {
        self.shared.registry.get_or_init(|| {
            CommandRegistry::build(&self.shared.groups, self.shared.config.warn_on_key_override)
        })
    }

    /// Canonical key token -> command code.
    pub fn keybinds(&self) -> &HashMap<String, String> {
        self.commands().keybinds()
    }

    /// The scope that currently receives dispatch.
    pub fn scope(&self) -> Option<CommandsScope> {
        self.shared
            .state
            .lock()
            .scopes
            .top()
            .map(|(_, scope)| scope.clone())
    }

    pub fn scope_depth(&self) -> usize {
        self.shared.state.lock().scopes.len()
    }

    /// Whether a listener is currently installed on the container.
    pub fn is_listening(&self) -> bool {
        self.shared.state.lock().attached.is_some()
    }

    /// Set where key events come from.
    ///
    /// Selectors are resolved through the configured `ContainerResolver`. If
    /// scopes are active the listener moves to the new container right away,
    /// otherwise it is installed by the next `use_scope`.
    pub fn set_container(&self, container: impl Into<Container>) -> Result<()> {
        let source = match container.into() {
            Container::Source(source) => source,
            Container::Selector(selector) => {
                let resolver = self.shared.state.lock().resolver.clone();
                let resolver = resolver.ok_or_else(|| {
                    CommandError::InvalidContainer(format!(
                        "no resolver configured for selector '{}'",
                        selector
                    ))
                })?;
                resolver.query_selector(&selector).ok_or_else(|| {
                    CommandError::InvalidContainer(format!(
                        "selector '{}' did not match an event source",
                        selector
                    ))
                })?
            }
        };

        let (previous, active) = {
            let mut state = self.shared.state.lock();
            state.container = Some(source);
            (state.attached.take(), !state.scopes.is_empty())
        };

        self.release(previous);
        if active {
            self.attach();
        }
        Ok(())
    }

    /// Push `scope` on top of the stack.
    ///
    /// The returned guard removes exactly this scope, wherever it sits by
    /// then, when disposed or dropped.
    #[must_use = "dropping the guard removes the scope immediately"]
    pub fn use_scope(&self, scope: CommandsScope) -> ScopeGuard {
        let registry = self.commands();

        if self.shared.config.warn_on_unknown_scope_codes {
            let mut unknown: Vec<&str> = scope
                .codes()
                .filter(|code| registry.get(code).is_none())
                .collect();
            if !unknown.is_empty() {
                unknown.sort_unstable();
                warn!(
                    event_type = "scope_unknown_codes",
                    codes = ?unknown,
                    "Scope has handlers for unregistered commands"
                );
            }
        }

        let id = self.shared.state.lock().scopes.push(scope);
        debug!(event_type = "scope_pushed", scope_id = %id, "Scope pushed");
        self.attach();

        ScopeGuard {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Dispatch a pre-normalized key token such as `"ctrl+g"`.
    ///
    /// Returns true if a handler ran. Tokens that are not canonical never
    /// match.
    pub fn keybind_pressed(&self, token: &str) -> bool {
        if self.scope_depth() == 0 {
            return false;
        }
        if !is_canonical(token) {
            debug!(event_type = "dispatch_miss", key = token, "Key token is not canonical");
            return false;
        }

        match self.resolve_handler(token) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Dispatch a raw key event.
    ///
    /// When a handler runs, the event's default behavior is suppressed first
    /// (unless disabled in the configuration).
    pub fn key_event_pressed<E: KeyboardEvent + ?Sized>(&self, event: &mut E) -> bool {
        if self.scope_depth() == 0 {
            return false;
        }

        let token = normalize(event);
        let Some(handler) = self.resolve_handler(&token) else {
            return false;
        };

        if self.shared.config.prevent_default {
            event.prevent_default();
        }
        handler();
        true
    }

    fn resolve_handler(&self, token: &str) -> Option<Handler> {
        let Some(code) = self.commands().code_for_key(token) else {
            debug!(event_type = "dispatch_miss", key = token, "Key is not bound");
            return None;
        };

        let state = self.shared.state.lock();
        let (scope_id, scope) = state.scopes.top()?;
        match scope.handler(code) {
            Some(handler) => {
                debug!(
                    event_type = "dispatch",
                    key = token,
                    code = code,
                    scope_id = %scope_id,
                    "Dispatching command"
                );
                Some(handler.clone())
            }
            None => {
                debug!(
                    event_type = "dispatch_miss",
                    key = token,
                    code = code,
                    scope_id = %scope_id,
                    "Active scope has no handler"
                );
                None
            }
        }
    }

    /// Install the listener if scopes are active, a container is set, and
    /// nothing is attached yet.
    fn attach(&self) {
        let source = {
            let state = self.shared.state.lock();
            if state.attached.is_some() || state.scopes.is_empty() {
                return;
            }
            match &state.container {
                Some(source) => source.clone(),
                None => return,
            }
        };

        let weak = Arc::downgrade(&self.shared);
        let listener: KeyListener = Arc::new(move |event: &mut dyn KeyboardEvent| {
            if let Some(shared) = weak.upgrade() {
                CommandManager { shared }.key_event_pressed(event);
            }
        });
        let event_name = &self.shared.config.event_name;
        let id = source.add_listener(event_name, listener);

        let stale = {
            let mut state = self.shared.state.lock();
            let still_wanted = state.attached.is_none()
                && !state.scopes.is_empty()
                && state
                    .container
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &source));
            if still_wanted {
                state.attached = Some(Attachment {
                    source: source.clone(),
                    id,
                });
                None
            } else {
                Some(Attachment { source, id })
            }
        };

        match stale {
            Some(attachment) => self.release(Some(attachment)),
            None => info!(
                event_type = "listener_attached",
                event_name = %event_name,
                "Key listener attached"
            ),
        }
    }

    fn release(&self, attachment: Option<Attachment>) {
        if let Some(Attachment { source, id }) = attachment {
            source.remove_listener(&self.shared.config.event_name, id);
            info!(
                event_type = "listener_detached",
                event_name = %self.shared.config.event_name,
                "Key listener detached"
            );
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(Attachment { source, id }) = self.state.get_mut().attached.take() {
            source.remove_listener(&self.config.event_name, id);
            info!(
                event_type = "listener_detached",
                event_name = %self.config.event_name,
                "Key listener detached on manager drop"
            );
        }
    }
}

impl fmt::Debug for CommandManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("CommandManager")
            .field("groups", &self.shared.groups.len())
            .field("scopes", &state.scopes.len())
            .field("listening", &state.attached.is_some())
            .finish()
    }
}

/// Keeps a scope on the manager's stack until disposed or dropped.
#[must_use = "dropping the guard removes the scope immediately"]
pub struct ScopeGuard {
    id: ScopeId,
    shared: Weak<Shared>,
}

impl ScopeGuard {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Remove the scope. Calling this more than once is a no-op.
    pub fn dispose(&self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        let released = {
            let mut state = shared.state.lock();
            if !state.scopes.remove(self.id) {
                return;
            }
            if state.scopes.is_empty() {
                state.attached.take()
            } else {
                None
            }
        };

        debug!(event_type = "scope_disposed", scope_id = %self.id, "Scope disposed");
        CommandManager { shared }.release(released);
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard").field("id", &self.id).finish()
    }
}
