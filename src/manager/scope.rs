//! Handler scopes and the stack that orders them.
//!
//! Only the most recently pushed scope that is still active receives
//! dispatch. Scopes are addressed by the `ScopeId` handed out at push time,
//! so a scope can be removed from any position.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Zero-argument command handler.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Stable handle of a pushed scope. Later pushes get larger ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// Handlers for the commands the active UI context can respond to.
///
/// ```
/// use global_commands::manager::CommandsScope;
///
/// let scope = CommandsScope::new()
///     .on("open_drawer", || println!("drawer"))
///     .on("print_sale", || println!("print"));
/// assert!(scope.contains("open_drawer"));
/// ```
#[derive(Clone, Default)]
pub struct CommandsScope {
    handlers: HashMap<String, Handler>,
}

impl CommandsScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(mut self, code: impl Into<String>, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.insert(code, handler);
        self
    }

    pub fn insert<F>(&mut self, code: impl Into<String>, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.handlers.insert(code.into(), Arc::new(handler));
    }

    pub fn handler(&self, code: &str) -> Option<&Handler> {
        self.handlers.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.handlers.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CommandsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<&str> = self.codes().collect();
        codes.sort_unstable();
        f.debug_struct("CommandsScope")
            .field("codes", &codes)
            .finish()
    }
}

/// Ordered scopes; the entry with the largest id is the top.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    scopes: BTreeMap<ScopeId, CommandsScope>,
    next_id: u64,
}

impl ScopeStack {
    pub(crate) fn push(&mut self, scope: CommandsScope) -> ScopeId {
        let id = ScopeId(self.next_id);
        self.next_id += 1;
        self.scopes.insert(id, scope);
        id
    }

    /// Remove a scope wherever it sits. Returns false if it was already gone.
    pub(crate) fn remove(&mut self, id: ScopeId) -> bool {
        self.scopes.remove(&id).is_some()
    }

    pub(crate) fn top(&self) -> Option<(ScopeId, &CommandsScope)> {
        self.scopes.last_key_value().map(|(id, scope)| (*id, scope))
    }

    pub(crate) fn len(&self) -> usize {
        self.scopes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
