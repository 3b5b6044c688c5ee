//! Synchronous observer hooks.
//!
//! The engine notifies external observers (UIs, hosts) through ordered
//! lists of zero-argument callbacks. Hooks fire on the caller's thread, in
//! registration order, after a successful mutation and before the mutating
//! call returns. They never fire on a failed operation.

use std::fmt;

/// Unique identifier for a registered hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookId(pub u32);

impl HookId {
    /// Create a new hook ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({})", self.0)
    }
}

/// Ordered registry of observer callbacks.
///
/// `register` hands back a [`HookId`] for later removal; `emit` invokes
/// every handler in registration order. Handlers must not re-enter the
/// object they observe.
#[derive(Default)]
pub struct HookRegistry {
    handlers: Vec<(HookId, Box<dyn FnMut()>)>,
    next_id: u32,
}

impl HookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning its ID.
    pub fn register(&mut self, handler: impl FnMut() + 'static) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler by ID.
    ///
    /// Returns true if the handler was found and removed.
    pub fn remove(&mut self, id: HookId) -> bool {
        if let Some(pos) = self.handlers.iter().position(|(h, _)| *h == id) {
            self.handlers.remove(pos);
            true
        } else {
            false
        }
    }

    /// Invoke all handlers in registration order.
    pub fn emit(&mut self) {
        for (_, handler) in &mut self.handlers {
            handler();
        }
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
