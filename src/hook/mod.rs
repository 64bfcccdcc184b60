//! Hooks observe every emitted message and act on the ones they match, for example by
//! capturing them or raising an alert. The registry is keyed by hook id, so adding a
//! hook with an existing id replaces the old one.

mod buffer;
mod json;

pub use buffer::BufferHook;
pub use json::JsonHook;

use crate::console::lock;
use crate::level::Level;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything a hook sees about one emission.
#[derive(Debug, Clone, Copy)]
pub struct HookEvent<'a> {
    pub level: Level,
    /// The rendered message, without label, prefix, or trailing newline handling.
    pub message: &'a str,
    /// The raw format string as passed by the caller.
    pub format: &'a str,
    /// The resolved arguments; lazy arguments have already run.
    pub args: &'a [String],
}

/// An observer plugged into a console.
///
/// Hooks run inline on the emitting thread while the console's registry lock is held.
/// A hook must not log through, or add/release hooks on, the console it is attached to:
/// the lock is not reentrant and the call would deadlock. A panic in a hook unwinds
/// through the log call.
pub trait Hook: Send + Sync {
    /// Registry key. Two hooks with the same id cannot be registered at once.
    fn id(&self) -> String;

    /// Whether [`Hook::action`] should run for this emission.
    fn matches(&self, event: &HookEvent<'_>) -> bool;

    /// Side effect for a matched emission.
    fn action(&self, event: &HookEvent<'_>);
}

pub(crate) type HookMap = BTreeMap<String, Arc<dyn Hook>>;

/// Id-keyed hook collection behind a mutex.
///
/// `Clone` produces another handle to the same registry. [`HookRegistry::deep_copy`]
/// produces an independent registry holding the same hook objects.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: Arc<Mutex<HookMap>>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `hook`, replacing any hook with the same id.
    pub fn add(&self, hook: impl Hook + 'static) {
        self.add_shared(Arc::new(hook));
    }

    /// Like [`HookRegistry::add`], for hooks the caller keeps a handle to.
    pub fn add_shared(&self, hook: Arc<dyn Hook>) {
        let id = hook.id();
        self.lock().insert(id, hook);
    }

    /// Removes the hook registered under `id`. Returns whether one was present.
    pub fn release(&self, id: &str) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Removes whatever hook is registered under `hook.id()`.
    pub fn release_hook(&self, hook: &dyn Hook) -> bool {
        self.release(&hook.id())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Independent registry with the same hooks. Changes to either side stay local.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let copy = self.lock().clone();
        Self {
            hooks: Arc::new(Mutex::new(copy)),
        }
    }

    /// Whether both handles point at the same registry.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.hooks, &other.hooks)
    }

    /// Runs every matching hook for `event`. Order follows the map, callers should
    /// not rely on it.
    pub fn dispatch(&self, event: &HookEvent<'_>) {
        dispatch_locked(&self.lock(), event);
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, HookMap> {
        lock(&self.hooks)
    }
}

pub(crate) fn dispatch_locked(hooks: &HookMap, event: &HookEvent<'_>) {
    for hook in hooks.values() {
        if hook.matches(event) {
            hook.action(event);
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}
