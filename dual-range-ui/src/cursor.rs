//! Cursor state and pointer input handed to components.
//!
//! # Usage
//!
//! A host records raw pointer activity in a [`CursorState`] and, once per
//! frame, turns it into a [`PointerInput`] relative to the component:
//!
//! ```
//! use dual_range_ui::{
//!     CursorState, PressKeyEventType, Px, PxPosition, PxSize,
//! };
//!
//! let mut cursor = CursorState::default();
//! cursor.update_position(PxPosition::new(Px(130), Px(40)));
//! cursor.press(PressKeyEventType::Left);
//!
//! let input = cursor.frame(PxPosition::new(Px(100), Px(30)), PxSize::new(Px(200), Px(24)));
//! assert_eq!(input.cursor_position_rel, Some(PxPosition::new(Px(30), Px(10))));
//! assert_eq!(input.cursor_events.len(), 1);
//! assert!(cursor.take_events().is_empty());
//! ```

use std::{collections::VecDeque, time::Instant};

use crate::{PxPosition, PxSize};

/// Maximum number of events to keep in the queue when the host stalls.
const KEEP_EVENTS_COUNT: usize = 10;

/// Central state for pointer interactions on the host side.
#[derive(Default, Debug)]
pub struct CursorState {
    /// Current cursor position in host coordinates, if any cursor is active.
    position: Option<PxPosition>,
    /// Bounded queue of cursor events awaiting processing.
    events: VecDeque<CursorEvent>,
}

impl CursorState {
    /// Adds a cursor event to the processing queue.
    ///
    /// If the queue exceeds [`KEEP_EVENTS_COUNT`], the oldest events are
    /// discarded.
    pub fn push_event(&mut self, event: CursorEvent) {
        self.events.push_back(event);

        if self.events.len() > KEEP_EVENTS_COUNT {
            self.events.pop_front();
        }
    }

    /// Queues a press of the given button at the current instant.
    pub fn press(&mut self, button: PressKeyEventType) {
        self.push_event(CursorEvent::now(CursorEventContent::Pressed(button)));
    }

    /// Queues a release of the given button at the current instant.
    pub fn release(&mut self, button: PressKeyEventType) {
        self.push_event(CursorEvent::now(CursorEventContent::Released(button)));
    }

    /// Updates the current cursor position; `None` means the cursor left the
    /// host surface.
    pub fn update_position(&mut self, position: impl Into<Option<PxPosition>>) {
        self.position = position.into();
    }

    /// Current cursor position in host coordinates.
    pub fn position(&self) -> Option<PxPosition> {
        self.position
    }

    /// Drains all queued events.
    pub fn take_events(&mut self) -> Vec<CursorEvent> {
        self.events.drain(..).collect()
    }

    /// Builds the input for one component frame, draining queued events.
    ///
    /// `origin` is the component's top-left corner in host coordinates.
    pub fn frame(&mut self, origin: PxPosition, size: PxSize) -> PointerInput {
        let cursor_position_rel = self
            .position
            .map(|pos| PxPosition::new(pos.x - origin.x, pos.y - origin.y));
        PointerInput {
            size,
            cursor_position_rel,
            cursor_events: self.take_events(),
            requests: WindowRequests::default(),
        }
    }
}

/// A single pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorEvent {
    /// Timestamp indicating when this event occurred.
    pub timestamp: Instant,
    /// The specific type and data of this cursor event.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// Creates an event stamped with the current instant.
    pub fn now(content: CursorEventContent) -> Self {
        Self {
            timestamp: Instant::now(),
            content,
        }
    }
}

/// The kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEventContent {
    /// A cursor button or touch point was pressed.
    Pressed(PressKeyEventType),
    /// A cursor button or touch point was released.
    Released(PressKeyEventType),
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressKeyEventType {
    /// The primary mouse button (typically left button) or primary touch.
    Left,
    /// The secondary mouse button (typically right button).
    Right,
    /// The middle mouse button (typically scroll wheel click).
    Middle,
}

/// Cursor icons a component may request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// The host's default arrow.
    #[default]
    Default,
    /// A pointing hand, used over interactive surfaces.
    Pointer,
    /// Interaction is not allowed here.
    NotAllowed,
}

/// Requests a component hands back to the host after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRequests {
    /// The cursor icon the host should show.
    pub cursor_icon: CursorIcon,
}

/// Pointer input for one component frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput {
    /// The component's size in physical pixels.
    pub size: PxSize,
    /// Cursor position relative to the component's top-left corner.
    pub cursor_position_rel: Option<PxPosition>,
    /// Events received since the previous frame, oldest first.
    pub cursor_events: Vec<CursorEvent>,
    /// Requests written by the component.
    pub requests: WindowRequests,
}

impl PointerInput {
    /// Creates input with a cursor position and no events.
    pub fn new(size: PxSize, cursor_position_rel: Option<PxPosition>) -> Self {
        Self {
            size,
            cursor_position_rel,
            cursor_events: Vec::new(),
            requests: WindowRequests::default(),
        }
    }

    /// Appends an event stamped now.
    pub fn with_event(mut self, content: CursorEventContent) -> Self {
        self.cursor_events.push(CursorEvent::now(content));
        self
    }
}
