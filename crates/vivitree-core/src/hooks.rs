//! Named callbacks fired in priority order.
//!
//! Callbacks registered under the same name run grouped by ascending
//! priority; within one priority they run in registration order.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vivitree_core::Hooks;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut hooks: Hooks<str> = Hooks::new();
//! let log = Rc::clone(&seen);
//! hooks.add("saved", move |path: &str| log.borrow_mut().push(path.to_string()));
//!
//! assert_eq!(hooks.fire("saved", "/tmp/out.json"), 1);
//! assert_eq!(hooks.fire("unknown", "ignored"), 0);
//! assert_eq!(*seen.borrow(), ["/tmp/out.json"]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Priority used by [`Hooks::add`].
pub const DEFAULT_PRIORITY: i32 = 10;

/// A registry of callbacks taking `&A`.
pub struct Hooks<A: ?Sized = ()> {
    hooks: HashMap<String, BTreeMap<i32, Vec<Box<dyn FnMut(&A)>>>>,
}

impl<A: ?Sized> Hooks<A> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Attach `callback` to `name` at `priority`. Lower priorities run first.
    pub fn register(&mut self, name: &str, callback: impl FnMut(&A) + 'static, priority: i32) {
        self.hooks
            .entry(name.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(Box::new(callback));
    }

    /// Attach `callback` at [`DEFAULT_PRIORITY`].
    pub fn add(&mut self, name: &str, callback: impl FnMut(&A) + 'static) {
        self.register(name, callback, DEFAULT_PRIORITY);
    }

    /// Drop every callback attached to `name`. Returns whether any were.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.hooks.remove(name).is_some()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Invoke the callbacks attached to `name` and return how many ran.
    /// Unknown names are a no-op.
    pub fn fire(&mut self, name: &str, args: &A) -> usize {
        let Some(groups) = self.hooks.get_mut(name) else {
            return 0;
        };
        let mut fired = 0;
        for callback in groups.values_mut().flatten() {
            callback(args);
            fired += 1;
        }
        fired
    }
}

impl<A: ?Sized> Default for Hooks<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for Hooks<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Hooks").field("names", &names).finish()
    }
}
