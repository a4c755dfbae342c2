//! The single-thumb range inputs the interval is delegated to.

use super::Step;

/// Identifies one of the two sub-controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// Covers `[min, midpoint]` and carries the lower value.
    Lower,
    /// Covers `[midpoint, max]` and carries the upper value.
    Upper,
}

impl Thumb {
    /// Both thumbs, lower first.
    pub const BOTH: [Thumb; 2] = [Thumb::Lower, Thumb::Upper];

    /// Name hosts with anchor positioning attach the thumb's tooltip to.
    pub fn anchor_name(self) -> &'static str {
        match self {
            Thumb::Lower => "--thumb1",
            Thumb::Upper => "--thumb2",
        }
    }
}

/// A native-like single-thumb range input.
///
/// Writing bounds or a value sanitizes the value the way a native range
/// input does: it is clamped into `[min, max]` and snapped to the step
/// lattice. Both sub-controls of a slider share the lattice anchored at the
/// interval start, which coincides with a lattice anchored at their own
/// `min` because the midpoint is itself a lattice point.
#[derive(Debug, Clone, PartialEq)]
pub struct SubControl {
    min: f64,
    max: f64,
    value: f64,
    step: Step,
    anchor: f64,
    list: Option<String>,
}

impl SubControl {
    pub(crate) fn new(min: f64, max: f64, value: f64, step: Step) -> Self {
        let mut control = Self {
            min,
            max,
            value: min,
            step,
            anchor: min,
            list: None,
        };
        control.set_value(value);
        control
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Current sanitized value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Step shared with the owning range slider.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Datalist id forwarded from the owning range slider.
    pub fn list(&self) -> Option<&str> {
        self.list.as_deref()
    }

    /// Position of the value along the sub-control, in `[0, 1]`. A
    /// degenerate sub-control reports 0.
    pub fn fraction(&self) -> f64 {
        let fraction = (self.value - self.min) / (self.max - self.min);
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// The unsnapped value at `fraction` along the sub-control.
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction * (self.max - self.min)
    }

    /// What the sub-control would store if `value` were written.
    pub fn sanitize(&self, value: f64) -> f64 {
        self.step.snap_anchored(value, self.anchor, self.min, self.max)
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.value = self.sanitize(value);
    }

    pub(crate) fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    pub(crate) fn set_lattice(&mut self, step: Step, anchor: f64) {
        self.step = step;
        self.anchor = anchor;
        self.set_value(self.value);
    }

    pub(crate) fn set_list(&mut self, list: Option<String>) {
        self.list = list;
    }
}
