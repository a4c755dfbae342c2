use thiserror::Error;

use super::Step;

/// Domain errors raised by the range slider's programmatic API.
///
/// Every operation validates all of its input before mutating anything, so
/// an error always leaves the slider in its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeSliderError {
    /// A selected value is NaN or infinite.
    #[error("invalid numbers {lower} - {upper}")]
    NonFinite {
        /// Requested lower value.
        lower: f64,
        /// Requested upper value.
        upper: f64,
    },
    /// The lower value is greater than the upper value.
    #[error("lower value greater than upper: {lower} - {upper}")]
    Inverted {
        /// Requested lower value.
        lower: f64,
        /// Requested upper value.
        upper: f64,
    },
    /// Selected values supplied with a new range fall outside of it.
    #[error("selected values {lower} - {upper} not in range [{min}, {max}]")]
    OutOfRange {
        /// Requested lower value.
        lower: f64,
        /// Requested upper value.
        upper: f64,
        /// Requested range start.
        min: f64,
        /// Requested range end.
        max: f64,
    },
    /// The range bounds are non-finite or `min > max`.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange {
        /// Requested range start.
        min: f64,
        /// Requested range end.
        max: f64,
    },
    /// The step is too fine for the selection to be split at a finite
    /// midpoint.
    #[error("no finite midpoint between {lower} and {upper} for step {step}")]
    NoMidpoint {
        /// Sanitized lower value.
        lower: f64,
        /// Sanitized upper value.
        upper: f64,
        /// Requested step.
        step: Step,
    },
    /// A fixed step must be finite and strictly positive.
    #[error("invalid step {0}")]
    InvalidStep(f64),
}
