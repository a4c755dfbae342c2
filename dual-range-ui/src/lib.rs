//! Host-facing primitives shared by dual-range components.
//!
//! # Overview
//!
//! `dual-range-ui` does not contain components itself. It provides the small
//! runtime surface a component needs to live inside an arbitrary host
//! (a window toolkit, a web binding, a test harness):
//!
//! - [`Px`] / [`Dp`] units and [`PxRect`] geometry
//! - [`Color`] values for render scenes
//! - identity-comparable callback handles ([`CallbackWith`], [`RenderSlot`])
//! - [`State`], a cloneable shared-state handle
//! - cursor input ([`CursorEvent`], [`CursorState`], [`PointerInput`])
//! - [`EventEmitter`], an observer with `subscribe` / `unsubscribe` / `notify`
//! - the process-wide [`ComponentRegistry`] mapping tag names to components
//! - [`HostCapabilities`] describing optional host features
//!
//! # Shared State
//!
//! ```
//! use dual_range_ui::State;
//!
//! let count = State::new(0usize);
//! let shared = count.clone();
//! shared.with_mut(|c| *c += 1);
//! assert_eq!(count.get(), 1);
//! ```
//!
//! # Events
//!
//! ```
//! use std::sync::{
//!     Arc,
//!     atomic::{AtomicUsize, Ordering},
//! };
//!
//! use dual_range_ui::EventEmitter;
//!
//! let emitter = EventEmitter::<u32>::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! let id = emitter.subscribe(move |value: u32| {
//!     counter.fetch_add(value as usize, Ordering::SeqCst);
//! });
//! emitter.notify(3);
//! assert!(emitter.unsubscribe(id));
//! emitter.notify(3);
//! assert_eq!(seen.load(Ordering::SeqCst), 3);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod cursor;
pub mod dp;
pub mod event;
pub mod host;
mod logging;
pub mod prop;
pub mod px;
pub mod registry;
pub mod state;

pub use crate::{
    color::Color,
    cursor::{
        CursorEvent, CursorEventContent, CursorIcon, CursorState, PointerInput, PressKeyEventType,
        WindowRequests,
    },
    dp::Dp,
    event::{EventEmitter, SubscriptionId},
    host::HostCapabilities,
    logging::init_tracing,
    prop::{CallbackWith, RenderSlot},
    px::{Px, PxPosition, PxRect, PxSize},
    registry::{ComponentRegistry, RegistrationOutcome, RegistryError},
    state::State,
};
