//! Shared state handles.
//!
//! A [`State<T>`] is a cheap, cloneable handle to a value guarded by a
//! `parking_lot::RwLock`. Components keep their controller in a `State` so a
//! host can hold the same handle and observe interaction flags.

use std::sync::Arc;

use parking_lot::RwLock;

/// Handle to shared component state.
///
/// `State<T>` is `Clone + Send + Sync` (for `T: Send + Sync`) and provides
/// `with`, `with_mut`, `get` and `set` to read or update the stored value.
///
/// Closures passed to `with`/`with_mut` run while the lock is held; they must
/// not call back into the same `State`.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Wraps a value in a new shared state.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Whether two handles point at the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
