use derive_setters::Setters;
use dual_range_ui::HostCapabilities;
use tracing::{debug, trace, warn};

use super::{
    RangeSliderError, Step, SubControl, Thumb, TieBreak,
    attributes::{AttributeMap, ObservedAttribute, parse_number},
    find_midpoint,
    layout::SplitFractions,
    tooltip::{TooltipFormatter, TooltipOptions, TooltipOverlay, TooltipPhase},
};
use crate::theme::RangeSliderTheme;

/// Kind of a [`RangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEventKind {
    /// The selection changed during a gesture.
    Input,
    /// A gesture ended with a selection different from the last committed
    /// one.
    Change,
}

/// Notification sent to subscribers of a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEvent {
    /// Whether the value is still moving or was committed.
    pub kind: RangeEventKind,
    /// The selected `(lower, upper)` pair.
    pub values: (f64, f64),
}

/// Optional extras for [`RangeSlider::set_range`](super::RangeSlider::set_range).
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[setters(strip_option)]
pub struct RangeOptions {
    /// Selection to apply together with the new interval. When absent the
    /// current selection is clamped into the interval.
    pub selected_values: Option<(f64, f64)>,
    /// Step to apply together with the new interval.
    pub step: Option<Step>,
}

/// Shared state behind a range slider handle.
///
/// Hosts can keep the [`State`](dual_range_ui::State) returned by
/// [`RangeSlider::controller`](super::RangeSlider::controller) to observe
/// the interaction flags.
#[derive(Debug, Clone)]
pub struct RangeSliderController {
    range: (f64, f64),
    step: Step,
    values: (f64, f64),
    committed: (f64, f64),
    midpoint: f64,
    disabled: bool,
    lower: SubControl,
    upper: SubControl,
    attributes: AttributeMap,
    pub(crate) theme: RangeSliderTheme,
    pub(crate) host: HostCapabilities,
    pub(crate) hovered: Option<Thumb>,
    pub(crate) dragging: Option<Thumb>,
    pub(crate) focused: Option<Thumb>,
    pub(crate) focus_visible: bool,
    pub(crate) tooltip: TooltipOverlay,
}

impl Default for RangeSliderController {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSliderController {
    /// A controller over `[0, 100]` with step 1 and the whole interval
    /// selected.
    pub fn new() -> Self {
        let (min, max) = (0.0, 100.0);
        let step = Step::DEFAULT;
        let midpoint = find_midpoint(min, min, max, step, TieBreak::PreferLower);
        Self {
            range: (min, max),
            step,
            values: (min, max),
            committed: (min, max),
            midpoint,
            disabled: false,
            lower: SubControl::new(min, midpoint, min, step),
            upper: SubControl::new(midpoint, max, max, step),
            attributes: AttributeMap::default(),
            theme: RangeSliderTheme::default(),
            host: HostCapabilities::current(),
            hovered: None,
            dragging: None,
            focused: None,
            focus_visible: false,
            tooltip: TooltipOverlay::default(),
        }
    }

    /// Interval `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Step lattice.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Selected `(lower, upper)` pair.
    pub fn values(&self) -> (f64, f64) {
        self.values
    }

    /// The pair most recently committed by a gesture or set programmatically.
    pub fn committed(&self) -> (f64, f64) {
        self.committed
    }

    /// Value splitting the interval between the sub-controls.
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Whether interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The sub-control behind `thumb`.
    pub fn sub_control(&self, thumb: Thumb) -> &SubControl {
        match thumb {
            Thumb::Lower => &self.lower,
            Thumb::Upper => &self.upper,
        }
    }

    /// Sub-control under the pointer.
    pub fn hovered(&self) -> Option<Thumb> {
        self.hovered
    }

    /// Thumb being dragged.
    pub fn dragging(&self) -> Option<Thumb> {
        self.dragging
    }

    /// Thumb that last received a keyboard action or press.
    pub fn focused(&self) -> Option<Thumb> {
        self.focused
    }

    /// Whether the focused thumb was reached by keyboard and should show
    /// its active style.
    pub fn focus_visible(&self) -> bool {
        self.focus_visible
    }

    /// Current tooltip visibility.
    pub fn tooltip_phase(&self) -> TooltipPhase {
        self.tooltip.phase()
    }

    /// Visual split of the track.
    pub fn split(&self) -> SplitFractions {
        SplitFractions::new(self.range.0, self.range.1, self.midpoint, self.values)
    }

    /// Theme used to lay out and paint the slider.
    pub fn theme(&self) -> &RangeSliderTheme {
        &self.theme
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub(crate) fn tooltip_formatter(&self) -> Option<&TooltipFormatter> {
        self.tooltip.formatter()
    }

    pub(crate) fn tooltip_options(&self) -> TooltipOptions {
        self.tooltip.options()
    }

    pub(crate) fn sub_control_mut(&mut self, thumb: Thumb) -> &mut SubControl {
        match thumb {
            Thumb::Lower => &mut self.lower,
            Thumb::Upper => &mut self.upper,
        }
    }

    /// Replaces the interval, optionally together with a selection and step.
    ///
    /// Everything is validated before anything changes.
    pub(crate) fn set_range(
        &mut self,
        min: f64,
        max: f64,
        options: RangeOptions,
    ) -> Result<(), RangeSliderError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RangeSliderError::InvalidRange { min, max });
        }
        let step = options.step.unwrap_or(self.step).validated()?;
        let selected = match options.selected_values {
            Some((lower, upper)) => {
                validate_pair(lower, upper)?;
                if lower < min || upper > max {
                    return Err(RangeSliderError::OutOfRange {
                        lower,
                        upper,
                        min,
                        max,
                    });
                }
                (lower, upper)
            }
            None => self.values,
        };

        let split = Split::plan((min, max), step, selected)?;
        self.apply_split(split);
        self.reflect_configuration();
        Ok(())
    }

    /// Sets the selection programmatically. Values are clamped into the
    /// interval and snapped to the lattice.
    pub(crate) fn set_values(&mut self, lower: f64, upper: f64) -> Result<(), RangeSliderError> {
        validate_pair(lower, upper)?;
        let split = Split::plan(self.range, self.step, (lower, upper))?;
        self.apply_split(split);
        Ok(())
    }

    /// Changes the step and re-snaps the selection.
    pub(crate) fn set_step(&mut self, step: Step) -> Result<(), RangeSliderError> {
        let split = Split::plan(self.range, step.validated()?, self.values)?;
        self.apply_split(split);
        self.reflect_configuration();
        Ok(())
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.attributes.set(ObservedAttribute::Disabled.name(), "");
        } else {
            self.attributes.remove(ObservedAttribute::Disabled.name());
        }
        self.apply_disabled(disabled);
    }

    pub(crate) fn set_list(&mut self, list: Option<String>) {
        match &list {
            Some(id) => {
                self.attributes.set(ObservedAttribute::List.name(), id.clone());
            }
            None => {
                self.attributes.remove(ObservedAttribute::List.name());
            }
        }
        self.apply_list(list);
    }

    pub(crate) fn set_tooltip_formatter(
        &mut self,
        formatter: Option<TooltipFormatter>,
        options: TooltipOptions,
    ) {
        self.tooltip.set_formatter(formatter, options);
    }

    /// Stores an attribute and applies it when it is observed.
    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        let previous = self.attributes.set(name, value);
        if previous.as_deref() != Some(value) {
            self.attribute_changed(name);
        }
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) {
        if self.attributes.remove(name).is_some() {
            self.attribute_changed(name);
        }
    }

    fn attribute_changed(&mut self, name: &str) {
        let Some(attribute) = ObservedAttribute::from_name(name) else {
            return;
        };
        let value = self.attributes.get(name).map(str::to_string);
        match attribute {
            ObservedAttribute::Disabled => self.apply_disabled(value.is_some()),
            ObservedAttribute::List => self.apply_list(value),
            ObservedAttribute::Min | ObservedAttribute::Max => {
                let bound = |attribute: ObservedAttribute, current: f64| {
                    match self.attributes.get(attribute.name()) {
                        Some(text) => parse_number(text),
                        None => Some(current),
                    }
                };
                let min = bound(ObservedAttribute::Min, self.range.0);
                let max = bound(ObservedAttribute::Max, self.range.1);
                match (min, max) {
                    (Some(min), Some(max)) if min <= max => {
                        self.reconfigure((min, max), self.step);
                    }
                    _ => debug!(?min, ?max, "ignoring invalid range attributes"),
                }
            }
            ObservedAttribute::Step => {
                let step = match value.as_deref() {
                    Some(text) => Step::parse(text),
                    None => Some(Step::DEFAULT),
                };
                match step {
                    Some(step) => self.reconfigure(self.range, step),
                    None => debug!(?value, "ignoring invalid step attribute"),
                }
            }
        }
    }

    /// Writes the typed interval and step back into the attribute map so
    /// both views agree.
    fn reflect_configuration(&mut self) {
        self.attributes
            .set(ObservedAttribute::Min.name(), self.range.0.to_string());
        self.attributes
            .set(ObservedAttribute::Max.name(), self.range.1.to_string());
        self.attributes
            .set(ObservedAttribute::Step.name(), self.step.to_string());
    }

    fn apply_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.hovered = None;
            self.dragging = None;
            self.focused = None;
            self.focus_visible = false;
            self.tooltip.reset();
        }
        debug!(disabled, "range slider disabled state changed");
    }

    fn apply_list(&mut self, list: Option<String>) {
        self.lower.set_list(list.clone());
        self.upper.set_list(list);
    }

    /// Applies an interval and step coming from attributes. A configuration
    /// the selection cannot be split under is ignored.
    fn reconfigure(&mut self, range: (f64, f64), step: Step) {
        match Split::plan(range, step, self.values) {
            Ok(split) => self.apply_split(split),
            Err(err) => debug!(%err, "ignoring range attributes"),
        }
    }

    /// Installs a planned split. The committed pair follows so the next
    /// gesture compares against it.
    fn apply_split(&mut self, split: Split) {
        self.range = split.range;
        self.step = split.step;
        self.commit_split(split);
        self.committed = self.values;
    }

    /// Stores the selection and midpoint of `split` and redistributes the
    /// sub-control bounds.
    fn commit_split(&mut self, split: Split) {
        let (min, max) = split.range;
        let (lower, upper) = split.values;
        trace!(lower, upper, midpoint = split.midpoint, "adapting range split");
        self.midpoint = split.midpoint;
        self.values = split.values;
        self.lower.set_lattice(split.step, min);
        self.upper.set_lattice(split.step, min);
        // Widen before narrowing so a sub-control never sees an empty range.
        self.lower.set_bounds(min, max);
        self.upper.set_bounds(min, max);
        self.lower.set_value(lower);
        self.upper.set_value(upper);
        self.lower.set_bounds(min, split.midpoint);
        self.upper.set_bounds(split.midpoint, max);
    }

    /// Writes a gesture value into `thumb`'s sub-control and synthesizes the
    /// resulting notification, if any.
    pub(crate) fn update_thumb(
        &mut self,
        thumb: Thumb,
        value: f64,
        kind: RangeEventKind,
    ) -> Option<RangeEvent> {
        self.sub_control_mut(thumb).set_value(value);
        self.sync_from_sub_controls(kind)
    }

    /// Reads both sub-controls after a gesture update or commit.
    pub(crate) fn sync_from_sub_controls(&mut self, kind: RangeEventKind) -> Option<RangeEvent> {
        let current = (self.lower.value(), self.upper.value());
        let moved = current != self.values
            && match Split::for_sanitized(self.range, self.step, current) {
                Some(split) => {
                    self.commit_split(split);
                    true
                }
                None => {
                    warn!(?current, "no finite midpoint, keeping previous split");
                    self.lower.set_value(self.values.0);
                    self.upper.set_value(self.values.1);
                    false
                }
            };
        match kind {
            RangeEventKind::Input => moved.then_some(RangeEvent {
                kind,
                values: self.values,
            }),
            RangeEventKind::Change => {
                if self.values == self.committed {
                    return None;
                }
                self.committed = self.values;
                Some(RangeEvent {
                    kind,
                    values: self.values,
                })
            }
        }
    }
}

/// A complete configuration computed before any field is written.
#[derive(Debug, Clone, Copy)]
struct Split {
    range: (f64, f64),
    step: Step,
    values: (f64, f64),
    midpoint: f64,
}

impl Split {
    /// Clamps and snaps `values` into `range` and finds their midpoint.
    fn plan(range: (f64, f64), step: Step, values: (f64, f64)) -> Result<Self, RangeSliderError> {
        let (min, max) = range;
        let lower = step.snap(values.0, min, max);
        let upper = step.snap(values.1, min, max).max(lower);
        Self::for_sanitized(range, step, (lower, upper))
            .ok_or(RangeSliderError::NoMidpoint { lower, upper, step })
    }

    /// Finds the midpoint for values already on the lattice. `None` when it
    /// is not finite.
    fn for_sanitized(range: (f64, f64), step: Step, values: (f64, f64)) -> Option<Self> {
        let midpoint = find_midpoint(range.0, values.0, values.1, step, TieBreak::PreferLower);
        midpoint.is_finite().then_some(Self {
            range,
            step,
            values,
            midpoint,
        })
    }
}

fn validate_pair(lower: f64, upper: f64) -> Result<(), RangeSliderError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(RangeSliderError::NonFinite { lower, upper });
    }
    if lower > upper {
        return Err(RangeSliderError::Inverted { lower, upper });
    }
    Ok(())
}
