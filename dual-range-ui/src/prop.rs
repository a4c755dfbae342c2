//! Identity-comparable callable handles for component props.
//!
//! ## Usage
//!
//! Store closures in args structs that derive `PartialEq`: handles compare by
//! identity (`Arc::ptr_eq`) instead of forcing deep closure comparisons.

use std::{fmt, sync::Arc};

/// Stable, comparable slot handle for any shared callable trait object.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Used for value-change handlers and formatters.
///
/// ```
/// use dual_range_ui::CallbackWith;
///
/// let double = CallbackWith::new(|v: i32| v * 2);
/// let same = double.clone();
/// assert_eq!(same.call(21), 42);
/// assert!(double == same);
/// assert!(double != CallbackWith::new(|v: i32| v * 2));
/// ```
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        let handler = self.slot.shared();
        handler(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

/// Stable, comparable render slot handle.
///
/// `RenderSlot` defers host-specific content (for example a rich tooltip
/// body) to the moment the host draws it.
#[derive(Clone)]
pub struct RenderSlot {
    slot: Slot<dyn Fn() + Send + Sync>,
}

impl RenderSlot {
    /// Create a render slot from a closure.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(render)),
        }
    }

    /// Execute the render closure.
    pub fn render(&self) {
        let render = self.slot.shared();
        render();
    }
}

impl<F> From<F> for RenderSlot
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl PartialEq for RenderSlot {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl Eq for RenderSlot {}

impl fmt::Debug for RenderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSlot").finish_non_exhaustive()
    }
}
