//! Value tooltips shown while dragging or hovering a thumb.
//!
//! ## State machine
//!
//! ```text
//!        press                 enter (not pressed)
//! Drag <------- Idle ------------------------------> Hover
//!   |            ^  ^                                   |
//!   +- release --+  +------------ leave ----------------+
//! ```
//!
//! Pressing always ends a hover tooltip. No hover tooltip starts while the
//! pointer is down. Removing the formatter or disabling the control returns
//! to `Idle`.

use derive_setters::Setters;
use dual_range_ui::{CallbackWith, PxPosition, RenderSlot};
use tracing::trace;

use super::Thumb;

/// Content produced by a [`TooltipFormatter`].
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipLabel {
    /// Plain text.
    Text(String),
    /// Host-rendered content.
    Custom(RenderSlot),
}

impl TooltipLabel {
    /// The text of a [`TooltipLabel::Text`] label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TooltipLabel::Text(text) => Some(text),
            TooltipLabel::Custom(_) => None,
        }
    }
}

impl From<String> for TooltipLabel {
    fn from(text: String) -> Self {
        TooltipLabel::Text(text)
    }
}

impl From<&str> for TooltipLabel {
    fn from(text: &str) -> Self {
        TooltipLabel::Text(text.to_string())
    }
}

impl From<RenderSlot> for TooltipLabel {
    fn from(slot: RenderSlot) -> Self {
        TooltipLabel::Custom(slot)
    }
}

/// Turns a value into tooltip content.
///
/// Formatters compare by identity, like every callback handle.
///
/// ```
/// use dual_range_components::range_slider::TooltipFormatter;
///
/// let percent = TooltipFormatter::new(|v: f64| format!("{v:.0}%"));
/// assert_eq!(percent.format(42.4).as_text(), Some("42%"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFormatter(CallbackWith<f64, TooltipLabel>);

impl TooltipFormatter {
    /// Wraps a closure returning anything convertible into a label.
    pub fn new<F, L>(format: F) -> Self
    where
        F: Fn(f64) -> L + Send + Sync + 'static,
        L: Into<TooltipLabel>,
    {
        Self(CallbackWith::new(move |value| format(value).into()))
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> TooltipLabel {
        self.0.call(value)
    }
}

impl From<CallbackWith<f64, TooltipLabel>> for TooltipFormatter {
    fn from(callback: CallbackWith<f64, TooltipLabel>) -> Self {
        Self(callback)
    }
}

/// Which pointer interactions show tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct TooltipOptions {
    /// Show a tooltip at the pointer while it rests over a sub-control.
    pub hover_active: bool,
    /// Show both thumb tooltips while a thumb is dragged.
    pub click_active: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            hover_active: true,
            click_active: true,
        }
    }
}

/// Current tooltip visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    /// No tooltip is visible.
    #[default]
    Idle,
    /// A single tooltip follows the pointer over `thumb`'s sub-control.
    Hover {
        /// Sub-control under the pointer.
        thumb: Thumb,
        /// Pointer position relative to the component.
        pointer: PxPosition,
    },
    /// Both thumb tooltips are visible while `thumb` is dragged.
    Drag {
        /// The dragged thumb.
        thumb: Thumb,
    },
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TooltipOverlay {
    formatter: Option<TooltipFormatter>,
    options: TooltipOptions,
    phase: TooltipPhase,
    pressed: bool,
}

impl TooltipOverlay {
    pub(crate) fn formatter(&self) -> Option<&TooltipFormatter> {
        self.formatter.as_ref()
    }

    pub(crate) fn options(&self) -> TooltipOptions {
        self.options
    }

    pub(crate) fn phase(&self) -> TooltipPhase {
        self.phase
    }

    pub(crate) fn set_formatter(
        &mut self,
        formatter: Option<TooltipFormatter>,
        options: TooltipOptions,
    ) {
        self.options = options;
        self.formatter = formatter;
        let keep = match self.phase {
            TooltipPhase::Idle => true,
            TooltipPhase::Hover { .. } => self.hover_enabled(),
            TooltipPhase::Drag { .. } => self.click_enabled(),
        };
        if !keep {
            self.transition(TooltipPhase::Idle);
        }
    }

    pub(crate) fn pointer_enter(&mut self, thumb: Thumb, pointer: PxPosition) {
        if self.pressed || !self.hover_enabled() {
            return;
        }
        self.transition(TooltipPhase::Hover { thumb, pointer });
    }

    pub(crate) fn pointer_move(&mut self, pointer: PxPosition) {
        if let TooltipPhase::Hover { thumb, .. } = self.phase {
            self.phase = TooltipPhase::Hover { thumb, pointer };
        }
    }

    pub(crate) fn pointer_leave(&mut self, thumb: Thumb) {
        if matches!(self.phase, TooltipPhase::Hover { thumb: hovered, .. } if hovered == thumb) {
            self.transition(TooltipPhase::Idle);
        }
    }

    pub(crate) fn press(&mut self, thumb: Thumb) {
        self.pressed = true;
        if self.click_enabled() {
            self.transition(TooltipPhase::Drag { thumb });
        } else {
            self.transition(TooltipPhase::Idle);
        }
    }

    pub(crate) fn release(&mut self) {
        self.pressed = false;
        if matches!(self.phase, TooltipPhase::Drag { .. }) {
            self.transition(TooltipPhase::Idle);
        }
    }

    /// Hides everything and forgets the pressed state.
    pub(crate) fn reset(&mut self) {
        self.pressed = false;
        self.transition(TooltipPhase::Idle);
    }

    fn hover_enabled(&self) -> bool {
        self.formatter.is_some() && self.options.hover_active
    }

    fn click_enabled(&self) -> bool {
        self.formatter.is_some() && self.options.click_active
    }

    fn transition(&mut self, phase: TooltipPhase) {
        if self.phase != phase {
            trace!(from = ?self.phase, to = ?phase, "tooltip transition");
        }
        self.phase = phase;
    }
}
