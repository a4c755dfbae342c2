//! Geometry of the split track.
//!
//! The container reserves twice the thumb width: each sub-control spans its
//! share of the content width plus one thumb, so the two thumbs can meet at
//! the midpoint without overlapping.

use dual_range_ui::{Px, PxPosition, PxRect, PxSize};

use super::{SubControl, Thumb};
use crate::theme::RangeSliderTheme;

/// How the interval is split between the sub-controls, as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFractions {
    /// Share of the content width given to the lower sub-control.
    pub lower_share: f64,
    /// Position of the lower value inside the lower sub-control.
    pub position_0: f64,
    /// Position of the upper value inside the upper sub-control.
    pub position_1: f64,
}

impl SplitFractions {
    /// Computes the split for the interval `[min, max]`.
    ///
    /// ```
    /// use dual_range_components::range_slider::SplitFractions;
    ///
    /// let split = SplitFractions::new(0.0, 100.0, 65.0, (30.0, 100.0));
    /// assert_eq!(split.lower_share, 0.65);
    /// assert_eq!(split.position_1, 1.0);
    /// ```
    pub fn new(min: f64, max: f64, midpoint: f64, (lower, upper): (f64, f64)) -> Self {
        Self {
            lower_share: finite_or_zero((midpoint - min) / (max - min)),
            position_0: finite_or_zero((lower - min) / (midpoint - min)),
            position_1: finite_or_zero((upper - midpoint) / (max - midpoint)),
        }
    }

    /// Share of the content width given to the upper sub-control.
    pub fn upper_share(&self) -> f64 {
        1.0 - self.lower_share
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Resolved pixel geometry of a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSliderLayout {
    /// Size of the whole component.
    pub size: PxSize,
    /// Thumb size.
    pub thumb_size: PxSize,
    /// Height of the track band.
    pub track_height: Px,
    /// Width shared by the sub-controls after reserving both thumbs.
    pub content_width: Px,
    /// Bounds of the lower sub-control.
    pub lower: PxRect,
    /// Bounds of the upper sub-control.
    pub upper: PxRect,
}

impl RangeSliderLayout {
    /// Lays out a component `width` pixels wide.
    pub fn new(width: Px, theme: &RangeSliderTheme, split: &SplitFractions) -> Self {
        let thumb_size = PxSize::new(theme.thumb_width.to_px(), theme.thumb_height.to_px());
        let track_height = theme.track_height.to_px();
        let height = thumb_size.height.max(track_height);
        let content_width = width.saturating_sub(thumb_size.width * 2).max(Px::ZERO);

        let lower_content =
            Px::round_from_f64(split.lower_share.clamp(0.0, 1.0) * content_width.to_f64());
        let upper_content = content_width - lower_content;

        let lower = PxRect::new(
            Px::ZERO,
            Px::ZERO,
            lower_content + thumb_size.width,
            height,
        );
        let upper = PxRect::new(
            lower.right(),
            Px::ZERO,
            upper_content + thumb_size.width,
            height,
        );

        Self {
            size: PxSize::new(width, height),
            thumb_size,
            track_height,
            content_width,
            lower,
            upper,
        }
    }

    /// Bounds of `thumb`'s sub-control.
    pub fn rect(&self, thumb: Thumb) -> PxRect {
        match thumb {
            Thumb::Lower => self.lower,
            Thumb::Upper => self.upper,
        }
    }

    /// The track band of `thumb`'s sub-control, vertically centred.
    pub fn track_rect(&self, thumb: Thumb) -> PxRect {
        let rect = self.rect(thumb);
        let y = (rect.height - self.track_height) / 2;
        PxRect::new(rect.x, rect.y + y, rect.width, self.track_height)
    }

    /// The sub-control under `position`, if any.
    pub fn hit_test(&self, position: PxPosition) -> Option<Thumb> {
        Thumb::BOTH
            .into_iter()
            .find(|thumb| self.rect(*thumb).contains(position))
    }

    /// Centre of the thumb of `control`, drawn inside `thumb`'s bounds.
    pub fn thumb_center(&self, thumb: Thumb, control: &SubControl) -> PxPosition {
        let rect = self.rect(thumb);
        let travel = (rect.width - self.thumb_size.width).max(Px::ZERO);
        let x = rect.x.to_f64()
            + self.thumb_size.width.to_f64() / 2.0
            + control.fraction() * travel.to_f64();
        PxPosition::new(Px::round_from_f64(x), rect.y + rect.height / 2)
    }

    /// Fraction along `thumb`'s sub-control that pointer `x` selects, the
    /// way a native range input maps a click onto its thumb travel.
    pub fn fraction_at(&self, thumb: Thumb, x: Px) -> f64 {
        let rect = self.rect(thumb);
        let travel = (rect.width - self.thumb_size.width).to_f64();
        if travel <= 0.0 {
            return 0.0;
        }
        let start = rect.x.to_f64() + self.thumb_size.width.to_f64() / 2.0;
        ((x.to_f64() - start) / travel).clamp(0.0, 1.0)
    }
}
