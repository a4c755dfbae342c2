//! A dual-thumb range slider.
//!
//! ## Usage
//!
//! Select a sub-range of a bounded interval, for example a price filter or a
//! time window.
//!
//! The interval is split at a midpoint between the two selected values. Each
//! side is a single-thumb [`SubControl`], so the thumbs can never cross. The
//! midpoint is recomputed whenever the selection, the interval or the step
//! changes.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use dual_range_components::range_slider::{RangeEventKind, RangeSlider, RangeSliderArgs, Step};
//!
//! let slider = RangeSlider::new(RangeSliderArgs::default().min(0.0).max(100.0).step(Step::Fixed(1.0)))?;
//! assert_eq!(slider.midpoint(), 50.0);
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let sink = changes.clone();
//! let id = slider.subscribe(move |event| {
//!     if event.kind == RangeEventKind::Change {
//!         sink.lock().unwrap().push(event.values);
//!     }
//! });
//!
//! // Programmatic updates never notify.
//! slider.set_values(30.0, 100.0)?;
//! assert_eq!(slider.midpoint(), 65.0);
//! assert!(changes.lock().unwrap().is_empty());
//! assert!(slider.unsubscribe(id));
//! # Ok::<(), dual_range_components::range_slider::RangeSliderError>(())
//! ```

mod attributes;
mod controller;
mod error;
mod interaction;
mod layout;
mod midpoint;
mod render;
mod sub_control;
mod tooltip;

use std::sync::Arc;

use derive_setters::Setters;
use dual_range_ui::{
    CallbackWith, ComponentRegistry, EventEmitter, HostCapabilities, PointerInput, Px,
    RegistrationOutcome, RegistryError, State, SubscriptionId,
};
use tracing::{debug, instrument};

pub use attributes::{OBSERVED_ATTRIBUTES, ObservedAttribute};
pub use controller::{RangeEvent, RangeEventKind, RangeOptions, RangeSliderController};
pub use error::RangeSliderError;
pub use interaction::ThumbAction;
pub use layout::{RangeSliderLayout, SplitFractions};
pub use midpoint::{Step, TieBreak, find_midpoint};
pub use render::{
    RangeSliderScene, StyleProperties, ThumbAnchor, ThumbState, ThumbVisual, TooltipKind,
    TooltipPlacement, TooltipVisual, TrackSegment,
};
pub use sub_control::{SubControl, Thumb};
pub use tooltip::{TooltipFormatter, TooltipLabel, TooltipOptions, TooltipPhase};

use crate::theme::RangeSliderTheme;

/// Tag used by [`RangeSlider::register`] when none is given.
pub const DEFAULT_TAG: &str = "double-range-slider";

/// Arguments for [`RangeSlider::new`].
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct RangeSliderArgs {
    /// Interval start.
    pub min: f64,
    /// Interval end.
    pub max: f64,
    /// Value granularity.
    pub step: Step,
    /// Initial selection. Defaults to the whole interval.
    #[setters(strip_option)]
    pub values: Option<(f64, f64)>,
    /// Disable interaction.
    pub disabled: bool,
    /// Datalist id forwarded to both sub-controls.
    #[setters(strip_option, into)]
    pub list: Option<String>,
    /// Colors and metrics.
    pub theme: RangeSliderTheme,
    /// Host capabilities for this instance. Defaults to the process-wide
    /// [`HostCapabilities::current`].
    #[setters(strip_option)]
    pub host: Option<HostCapabilities>,
    /// Optional tooltip formatter.
    #[setters(strip_option)]
    pub tooltip_formatter: Option<TooltipFormatter>,
    /// Which interactions show tooltips.
    pub tooltip_options: TooltipOptions,
    /// Called with the selection while a gesture moves a thumb.
    #[setters(skip)]
    pub on_input: Option<CallbackWith<(f64, f64)>>,
    /// Called with the selection when a gesture commits a new value.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<(f64, f64)>>,
}

impl RangeSliderArgs {
    /// Sets the on_input handler.
    pub fn on_input<F>(mut self, on_input: F) -> Self
    where
        F: Fn((f64, f64)) + Send + Sync + 'static,
    {
        self.on_input = Some(CallbackWith::new(on_input));
        self
    }

    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn((f64, f64)) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: Step::DEFAULT,
            values: None,
            disabled: false,
            list: None,
            theme: RangeSliderTheme::default(),
            host: None,
            tooltip_formatter: None,
            tooltip_options: TooltipOptions::default(),
            on_input: None,
            on_change: None,
        }
    }
}

/// Handle to a dual-thumb range slider.
///
/// Clones share the same slider. Notifications are dispatched after the
/// internal lock is released, so handlers may call back into the slider.
#[derive(Clone)]
pub struct RangeSlider {
    controller: State<RangeSliderController>,
    events: Arc<EventEmitter<RangeEvent>>,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::from_controller(RangeSliderController::new())
    }
}

impl RangeSlider {
    /// Creates a slider from `args`.
    #[instrument(level = "debug", skip_all, fields(min = args.min, max = args.max))]
    pub fn new(args: RangeSliderArgs) -> Result<Self, RangeSliderError> {
        let mut controller = RangeSliderController::new();
        controller.theme = args.theme;
        controller.host = args.host.unwrap_or_else(HostCapabilities::current);
        let options = RangeOptions {
            selected_values: Some(args.values.unwrap_or((args.min, args.max))),
            step: Some(args.step),
        };
        controller.set_range(args.min, args.max, options)?;
        controller.set_disabled(args.disabled);
        controller.set_list(args.list);
        controller.set_tooltip_formatter(args.tooltip_formatter, args.tooltip_options);

        let slider = Self::from_controller(controller);
        if let Some(on_input) = args.on_input {
            slider.subscribe(move |event: RangeEvent| {
                if event.kind == RangeEventKind::Input {
                    on_input.call(event.values);
                }
            });
        }
        if let Some(on_change) = args.on_change {
            slider.subscribe(move |event: RangeEvent| {
                if event.kind == RangeEventKind::Change {
                    on_change.call(event.values);
                }
            });
        }
        Ok(slider)
    }

    fn from_controller(controller: RangeSliderController) -> Self {
        Self {
            controller: State::new(controller),
            events: Arc::new(EventEmitter::new()),
        }
    }

    /// Registers the component in the process-wide registry under `tag`, or
    /// [`DEFAULT_TAG`] when `None`.
    pub fn register(tag: Option<&str>) -> Result<RegistrationOutcome, RegistryError> {
        let tag = tag.unwrap_or(DEFAULT_TAG);
        let outcome = ComponentRegistry::global().register::<RangeSlider>(tag)?;
        debug!(tag, ?outcome, "range slider registration");
        Ok(outcome)
    }

    /// The tag the component is registered under.
    pub fn tag() -> Option<String> {
        ComponentRegistry::global().tag_of::<RangeSlider>()
    }

    /// Shared controller state.
    pub fn controller(&self) -> State<RangeSliderController> {
        self.controller.clone()
    }

    /// Selected `(lower, upper)` pair.
    pub fn values(&self) -> (f64, f64) {
        self.controller.with(|c| c.values())
    }

    /// Value splitting the interval between the sub-controls.
    pub fn midpoint(&self) -> f64 {
        self.controller.with(|c| c.midpoint())
    }

    /// Interval start.
    pub fn min(&self) -> f64 {
        self.controller.with(|c| c.range().0)
    }

    /// Interval end.
    pub fn max(&self) -> f64 {
        self.controller.with(|c| c.range().1)
    }

    /// Step lattice.
    pub fn step(&self) -> Step {
        self.controller.with(|c| c.step())
    }

    /// Whether interaction is disabled.
    pub fn disabled(&self) -> bool {
        self.controller.with(|c| c.is_disabled())
    }

    /// Datalist id forwarded to the sub-controls.
    pub fn list(&self) -> Option<String> {
        self.controller.with(|c| c.sub_control(Thumb::Lower).list().map(str::to_string))
    }

    /// Replaces the interval. Without selected values the current selection
    /// is clamped into the new interval.
    #[instrument(level = "debug", skip(self))]
    pub fn set_range(
        &self,
        min: f64,
        max: f64,
        options: RangeOptions,
    ) -> Result<(), RangeSliderError> {
        self.controller.with_mut(|c| c.set_range(min, max, options))
    }

    /// Sets the selection. Values are clamped into the interval and snapped
    /// to the step lattice.
    #[instrument(level = "debug", skip(self))]
    pub fn set_values(&self, lower: f64, upper: f64) -> Result<(), RangeSliderError> {
        self.controller.with_mut(|c| c.set_values(lower, upper))
    }

    /// Sets the interval start. Non-finite values are ignored.
    pub fn set_min(&self, min: f64) {
        if min.is_finite() {
            self.set_attribute(ObservedAttribute::Min.name(), &min.to_string());
        }
    }

    /// Sets the interval end. Non-finite values are ignored.
    pub fn set_max(&self, max: f64) {
        if max.is_finite() {
            self.set_attribute(ObservedAttribute::Max.name(), &max.to_string());
        }
    }

    /// Sets the step lattice.
    pub fn set_step(&self, step: Step) -> Result<(), RangeSliderError> {
        self.controller.with_mut(|c| c.set_step(step))
    }

    /// Enables or disables interaction. Disabling hides all tooltips.
    pub fn set_disabled(&self, disabled: bool) {
        self.controller.with_mut(|c| c.set_disabled(disabled));
    }

    /// Sets or clears the datalist id.
    pub fn set_list(&self, list: Option<String>) {
        self.controller.with_mut(|c| c.set_list(list));
    }

    /// Sets an attribute. Observed attributes reconfigure the slider;
    /// malformed values are ignored.
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.controller.with_mut(|c| c.set_attribute(name, value));
    }

    /// Removes an attribute.
    pub fn remove_attribute(&self, name: &str) {
        self.controller.with_mut(|c| c.remove_attribute(name));
    }

    /// Reads an attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.controller.with(|c| c.attribute(name).map(str::to_string))
    }

    /// Sets or removes the tooltip formatter. Without a formatter no
    /// tooltips are shown.
    pub fn set_tooltip_formatter(
        &self,
        formatter: Option<TooltipFormatter>,
        options: TooltipOptions,
    ) {
        self.controller.with_mut(|c| c.set_tooltip_formatter(formatter, options));
    }

    /// The current tooltip formatter.
    pub fn tooltip_formatter(&self) -> Option<TooltipFormatter> {
        self.controller.with(|c| c.tooltip_formatter().cloned())
    }

    /// The current tooltip options.
    pub fn tooltip_options(&self) -> TooltipOptions {
        self.controller.with(|c| c.tooltip_options())
    }

    /// Subscribes to input and change notifications.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(RangeEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Removes a subscription. Returns `false` for unknown tokens.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Handles one frame of pointer input and writes cursor requests back
    /// into `input`.
    pub fn handle_input(&self, input: &mut PointerInput) {
        let pending = self.controller.with_mut(|c| interaction::handle_pointer(c, input));
        self.dispatch(pending);
    }

    /// Applies a keyboard or accessibility action to `thumb`.
    pub fn handle_action(&self, thumb: Thumb, action: ThumbAction) {
        let pending = self.controller.with_mut(|c| interaction::handle_action(c, thumb, action));
        self.dispatch(pending);
    }

    /// Lays out the slider `width` pixels wide and describes how to draw it.
    pub fn scene(&self, width: Px) -> RangeSliderScene {
        let draft = self.controller.with(|c| render::build_scene(c, width));
        draft.finish()
    }

    /// Container custom properties for the current selection.
    pub fn style_properties(&self) -> StyleProperties {
        self.controller.with(|c| StyleProperties::from(&c.split()))
    }

    fn dispatch(&self, pending: interaction::PendingEvents) {
        for event in pending {
            debug!(kind = ?event.kind, values = ?event.values, "range slider event");
            self.events.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dual_range_ui::{CursorEventContent, PressKeyEventType, PxPosition, PxSize};

    use super::*;

    #[test]
    fn test_new_rejects_invalid_args() {
        let err = RangeSlider::new(RangeSliderArgs::default().min(10.0).max(0.0))
            .err()
            .expect("inverted range");
        assert_eq!(err, RangeSliderError::InvalidRange { min: 10.0, max: 0.0 });
        assert!(RangeSlider::new(RangeSliderArgs::default().step(Step::Fixed(0.0))).is_err());
        assert!(RangeSlider::new(RangeSliderArgs::default().values((5.0, 2.0))).is_err());
    }

    #[test]
    fn test_args_configure_the_slider() {
        let slider = RangeSlider::new(
            RangeSliderArgs::default()
                .min(-50.0)
                .max(50.0)
                .step(Step::Fixed(5.0))
                .values((-20.0, 10.0))
                .list("ticks")
                .disabled(true),
        )
        .expect("valid args");
        assert_eq!(slider.values(), (-20.0, 10.0));
        assert_eq!(slider.midpoint(), -5.0);
        assert_eq!(slider.list().as_deref(), Some("ticks"));
        assert!(slider.disabled());
        assert_eq!(slider.attribute("min").as_deref(), Some("-50"));
        assert_eq!(slider.attribute("disabled").as_deref(), Some(""));
    }

    #[test]
    fn test_on_change_callback_from_args() {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = changes.clone();
        let slider = RangeSlider::new(RangeSliderArgs::default().on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .expect("valid args");

        slider.handle_action(Thumb::Lower, ThumbAction::PageIncrement);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        assert_eq!(slider.values(), (10.0, 100.0));
    }

    #[test]
    fn test_handlers_may_reenter() {
        let slider = RangeSlider::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let inner = slider.clone();
        let counter = seen.clone();
        slider.subscribe(move |event| {
            assert_eq!(inner.values(), event.values);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut input = PointerInput::new(
            PxSize::new(Px(248), Px(24)),
            Some(PxPosition::new(Px(72), Px(12))),
        )
        .with_event(CursorEventContent::Pressed(PressKeyEventType::Left))
        .with_event(CursorEventContent::Released(PressKeyEventType::Left));
        slider.handle_input(&mut input);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_min_ignores_non_finite() {
        let slider = RangeSlider::default();
        slider.set_min(f64::NAN);
        assert_eq!(slider.min(), 0.0);
        slider.set_min(20.0);
        assert_eq!(slider.min(), 20.0);
        assert_eq!(slider.values(), (20.0, 100.0));
    }
}
