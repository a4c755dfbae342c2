//! Step lattice and the midpoint that splits the interval between the two
//! sub-controls.

use std::fmt;

use super::RangeSliderError;

/// Relative tolerance used when deciding whether a value sits on the step
/// lattice. Lattice points are computed as `min + k * step` in `f64`, so
/// values such as `0.3` with step `0.1` land a few ulps off an integer `k`.
const LATTICE_EPSILON: f64 = 1e-9;

/// Granularity of selectable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Any value in the interval may be selected.
    Any,
    /// Values lie on the lattice `min + k * step`.
    Fixed(f64),
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Any => f.write_str("any"),
            Step::Fixed(step) => write!(f, "{step}"),
        }
    }
}

impl Step {
    /// The step a native range input uses when none is given.
    pub const DEFAULT: Step = Step::Fixed(1.0);

    /// A fixed step. It must be finite and strictly positive.
    pub fn fixed(step: f64) -> Result<Self, RangeSliderError> {
        Step::Fixed(step).validated()
    }

    pub(crate) fn validated(self) -> Result<Self, RangeSliderError> {
        match self {
            Step::Fixed(step) if !step.is_finite() || step <= 0.0 => {
                Err(RangeSliderError::InvalidStep(step))
            }
            step => Ok(step),
        }
    }

    /// Parses attribute text.
    ///
    /// ```
    /// use dual_range_components::range_slider::Step;
    ///
    /// assert_eq!(Step::parse("any"), Some(Step::Any));
    /// assert_eq!(Step::parse(" 0.5 "), Some(Step::Fixed(0.5)));
    /// assert_eq!(Step::parse("-2"), None);
    /// assert_eq!(Step::parse("ten"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("any") {
            return Some(Step::Any);
        }
        let step = text.parse::<f64>().ok()?;
        Step::fixed(step).ok()
    }

    /// The fixed step size, if any.
    pub fn size(self) -> Option<f64> {
        match self {
            Step::Any => None,
            Step::Fixed(step) => Some(step),
        }
    }

    /// Sanitizes `value` for the interval `[min, max]`.
    ///
    /// The value is clamped and rounded to the nearest lattice point; when
    /// rounding overshoots `max` the largest lattice point below `max` is
    /// used instead. An empty interval (`max < min`) yields `min`.
    pub fn snap(self, value: f64, min: f64, max: f64) -> f64 {
        self.snap_anchored(value, min, min, max)
    }

    /// Like [`Step::snap`] for a lattice anchored at `anchor` instead of
    /// `min`. Lattice points are always computed as `anchor + k * step`, so
    /// two intervals sharing an anchor agree on every point bit for bit.
    pub fn snap_anchored(self, value: f64, anchor: f64, min: f64, max: f64) -> f64 {
        if max < min || value.is_nan() {
            return min;
        }
        let value = value.clamp(min, max);
        let Step::Fixed(step) = self else {
            return value;
        };
        let steps = (value - anchor) / step;
        let mut snapped = anchor + near_integer(steps).unwrap_or_else(|| steps.round()) * step;
        if snapped > max {
            snapped = anchor + lattice_floor((max - anchor) / step) * step;
        }
        if snapped < min {
            snapped = anchor + lattice_ceil((min - anchor) / step) * step;
        }
        snapped.clamp(min, max)
    }

    /// Whether `value` lies on the lattice anchored at `min`.
    pub fn is_on_lattice(self, value: f64, min: f64) -> bool {
        match self {
            Step::Any => value.is_finite(),
            Step::Fixed(step) => {
                let steps = (value - min) / step;
                steps.is_finite() && near_integer(steps).is_some()
            }
        }
    }

    /// The distance one keyboard step moves a thumb.
    pub(crate) fn increment(self, min: f64, max: f64) -> f64 {
        match self {
            Step::Fixed(step) => step,
            Step::Any => (max - min) / 100.0,
        }
    }
}

/// Which neighbour to pick when an odd number of steps separates the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Round the midpoint towards the lower value.
    #[default]
    PreferLower,
    /// Round the midpoint towards the upper value.
    PreferUpper,
}

/// Computes the value splitting the interval between `x0` and `x1`.
///
/// With a fixed step the result lies on the lattice anchored at `min` and
/// satisfies `x0 <= m <= x1` whenever both values are on the lattice. A
/// non-finite result tells the caller to keep its current midpoint.
///
/// ```
/// use dual_range_components::range_slider::{Step, TieBreak, find_midpoint};
///
/// assert_eq!(find_midpoint(0.0, 0.0, 100.0, Step::Fixed(1.0), TieBreak::PreferLower), 50.0);
/// assert_eq!(find_midpoint(0.0, 30.0, 100.0, Step::Fixed(1.0), TieBreak::PreferLower), 65.0);
/// assert_eq!(find_midpoint(0.0, 0.0, 3.0, Step::Fixed(1.0), TieBreak::PreferLower), 1.0);
/// assert_eq!(find_midpoint(0.0, 0.0, 3.0, Step::Fixed(1.0), TieBreak::PreferUpper), 2.0);
/// assert_eq!(find_midpoint(0.0, 20.0, 80.0, Step::Any, TieBreak::PreferLower), 50.0);
/// ```
pub fn find_midpoint(min: f64, x0: f64, x1: f64, step: Step, tie_break: TieBreak) -> f64 {
    let Step::Fixed(step) = step else {
        return (x0 + x1) / 2.0;
    };
    let steps_from_min = lattice_floor((x0 - min) / step);
    let steps_to_max = lattice_ceil((x1 - min) / step);
    let delta = steps_to_max - steps_from_min;
    let half = if delta % 2.0 == 0.0 {
        delta / 2.0
    } else {
        match tie_break {
            TieBreak::PreferLower => (delta - 1.0) / 2.0,
            TieBreak::PreferUpper => (delta + 1.0) / 2.0,
        }
    };
    min + (steps_from_min + half) * step
}

fn near_integer(steps: f64) -> Option<f64> {
    let nearest = steps.round();
    ((steps - nearest).abs() <= LATTICE_EPSILON * nearest.abs().max(1.0)).then_some(nearest)
}

fn lattice_floor(steps: f64) -> f64 {
    near_integer(steps).unwrap_or_else(|| steps.floor())
}

fn lattice_ceil(steps: f64) -> f64 {
    near_integer(steps).unwrap_or_else(|| steps.ceil())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest_lattice_point() {
        let step = Step::Fixed(5.0);
        assert_eq!(step.snap(12.0, 0.0, 100.0), 10.0);
        assert_eq!(step.snap(13.0, 0.0, 100.0), 15.0);
        assert_eq!(step.snap(-4.0, 0.0, 100.0), 0.0);
        assert_eq!(step.snap(140.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_snap_never_overshoots_max() {
        // Lattice is 0, 3, 6, 9; 10 is not reachable.
        assert_eq!(Step::Fixed(3.0).snap(10.0, 0.0, 10.0), 9.0);
        assert_eq!(Step::Fixed(3.0).snap(9.6, 0.0, 10.0), 9.0);
    }

    #[test]
    fn test_snap_is_canonical() {
        let step = Step::Fixed(0.1);
        let value = 0.1 + 0.2;
        assert_eq!(step.snap(value, 0.0, 1.0), value);
        assert!(step.is_on_lattice(value, 0.0));
        assert!(!step.is_on_lattice(0.35, 0.0));
        // One ulp below a lattice point snaps onto it.
        assert_eq!(Step::Fixed(1.0).snap(30.0 - 1e-14, 0.0, 100.0), 30.0);
        // A non-lattice max is kept rather than stepping a whole step down.
        assert_eq!(step.snap(0.3, 0.0, 0.3), 0.3);
    }

    #[test]
    fn test_snap_anchored_agrees_across_intervals() {
        let step = Step::Fixed(0.1);
        let midpoint = 0.0 + 7.0 * 0.1;
        let below = step.snap_anchored(0.7, 0.0, 0.0, midpoint);
        let above = step.snap_anchored(0.7, 0.0, midpoint, 1.0);
        assert_eq!(below.to_bits(), above.to_bits());
    }

    #[test]
    fn test_snap_empty_interval_yields_min() {
        assert_eq!(Step::Any.snap(5.0, 10.0, 0.0), 10.0);
        assert_eq!(Step::Fixed(1.0).snap(f64::NAN, 2.0, 4.0), 2.0);
    }

    #[test]
    fn test_fixed_rejects_invalid_steps() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(Step::fixed(bad).is_err(), "{bad} should be rejected");
        }
        assert_eq!(Step::fixed(0.25), Ok(Step::Fixed(0.25)));
    }

    #[test]
    fn test_display_matches_attribute_text() {
        assert_eq!(Step::Any.to_string(), "any");
        assert_eq!(Step::Fixed(1.0).to_string(), "1");
        assert_eq!(Step::Fixed(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_midpoint_handles_floating_lattice_values() {
        let m = find_midpoint(0.0, 0.3, 0.3, Step::Fixed(0.1), TieBreak::PreferLower);
        assert!((m - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_equal_values() {
        let m = find_midpoint(0.0, 40.0, 40.0, Step::Fixed(1.0), TieBreak::PreferUpper);
        assert_eq!(m, 40.0);
    }

    #[test]
    fn test_midpoint_non_finite_propagates() {
        let m = find_midpoint(0.0, f64::NAN, 10.0, Step::Fixed(1.0), TieBreak::PreferLower);
        assert!(!m.is_finite());
    }

    proptest! {
        #[test]
        fn midpoint_stays_on_lattice_between_values(
            min in -1_000i32..1_000,
            step in prop_oneof![Just(0.1f64), Just(0.25), Just(1.0), Just(2.0), Just(7.0)],
            steps in 0u32..400,
            a in 0u32..400,
            b in 0u32..400,
            prefer_upper in any::<bool>(),
        ) {
            let min = f64::from(min);
            let max = min + f64::from(steps) * step;
            let (k0, k1) = (a.min(b).min(steps), a.max(b).min(steps));
            let x0 = min + f64::from(k0) * step;
            let x1 = min + f64::from(k1) * step;
            let tie_break = if prefer_upper { TieBreak::PreferUpper } else { TieBreak::PreferLower };

            let m = find_midpoint(min, x0, x1, Step::Fixed(step), tie_break);

            let tolerance = 1e-9 * max.abs().max(1.0);
            prop_assert!(m >= min - tolerance && m <= max + tolerance);
            prop_assert!(m >= x0 - tolerance && m <= x1 + tolerance);
            prop_assert!(Step::Fixed(step).is_on_lattice(m, min));
        }

        #[test]
        fn continuous_midpoint_is_the_mean(x0 in -1e6f64..1e6, span in 0f64..1e6) {
            let x1 = x0 + span;
            let m = find_midpoint(0.0, x0, x1, Step::Any, TieBreak::PreferLower);
            prop_assert!(m >= x0 && m <= x1);
        }
    }
}
